//! Static content rendered by the pages.
//!
//! Everything here is fixture data: demo entries for the component library,
//! the Home page sections, pricing plans, testimonials and FAQ entries.

use serde::Serialize;

/// Live preview rendered next to a component demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DemoPreview {
    Alert,
    Modal,
    Dropdown,
    Button,
    Card,
    Tooltip,
    Accordion,
    ProgressBar { percent: u8 },
    Tabs,
    InteractiveButton,
    ElevatedCard,
    SmartInput,
    Avatar,
}

/// One entry of the component library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentDemo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub snippet: Option<&'static str>,
    pub preview: DemoPreview,
}

impl ComponentDemo {
    pub const DEFAULT_DESCRIPTION: &'static str =
        "A versatile UI component for modern applications.";

    pub fn description(&self) -> &'static str {
        self.description.unwrap_or(Self::DEFAULT_DESCRIPTION)
    }

    /// Code shown by "Show Code". Entries without a snippet get a generic sample.
    pub fn code(&self) -> String {
        match self.snippet {
            Some(snippet) => snippet.to_string(),
            None => format!(
                "// Sample {} code\n<{} className=\"bg-primary text-light ...\" />",
                self.name,
                self.name.to_lowercase()
            ),
        }
    }
}

/// Visual emphasis of a pricing card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum CardVariant {
    #[default]
    Default,
    Highlighted,
}

impl CardVariant {
    pub fn is_highlighted(&self) -> bool {
        matches!(self, CardVariant::Highlighted)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub tier: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub variant: CardVariant,
}

impl PricingPlan {
    /// Placeholder message for the "Choose Plan" button.
    pub fn choose_message(&self) -> String {
        format!("Choose {} Plan (Placeholder)", self.tier)
    }
}

/// Glyph drawn above a feature card title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FeatureIcon {
    Check,
    Code,
    Users,
    Rocket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub rating: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: u16,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ContactChannel {
    Email,
    Phone,
    Address,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactDetail {
    pub channel: ContactChannel,
    pub value: &'static str,
}

// ---------------------------------------------------------------------------
// Components page
// ---------------------------------------------------------------------------

pub const COMPONENT_LIBRARY: [ComponentDemo; 9] = [
    ComponentDemo {
        id: "alert",
        name: "Alert",
        description: Some("Customizable alert boxes for notifications."),
        snippet: Some(
            r#"<div className="bg-accent text-secondary p-4 rounded-lg shadow-lg">Success Alert!</div>"#,
        ),
        preview: DemoPreview::Alert,
    },
    ComponentDemo {
        id: "modal",
        name: "Modal",
        description: Some("Overlay modals with animations."),
        snippet: Some(
            r#"<div className="bg-secondary p-6 rounded-lg shadow-xl border border-light/10">Modal Content</div>"#,
        ),
        preview: DemoPreview::Modal,
    },
    ComponentDemo {
        id: "dropdown",
        name: "Dropdown",
        description: Some("Styled dropdown menus."),
        snippet: Some(
            r#"<select className="bg-secondary border border-accent p-2 rounded text-light"><option>Option 1</option></select>"#,
        ),
        preview: DemoPreview::Dropdown,
    },
    ComponentDemo {
        id: "button",
        name: "Button",
        description: Some("Interactive buttons with hover effects."),
        snippet: Some(
            r#"<button className="bg-primary text-light px-4 py-2 rounded hover:bg-accent">Click Me</button>"#,
        ),
        preview: DemoPreview::Button,
    },
    ComponentDemo {
        id: "card",
        name: "Card",
        description: Some("Versatile card components for layouts."),
        snippet: Some(r#"<div className="bg-secondary p-4 rounded-lg shadow-md">Card Content</div>"#),
        preview: DemoPreview::Card,
    },
    ComponentDemo {
        id: "tooltip",
        name: "Tooltip",
        description: Some("Simple tooltips on hover."),
        snippet: Some(
            r#"<div className="relative group"><button>Hover</button><span className="absolute hidden group-hover:block bg-accent p-2 rounded">Tooltip</span></div>"#,
        ),
        preview: DemoPreview::Tooltip,
    },
    ComponentDemo {
        id: "accordion",
        name: "Accordion",
        description: Some("Collapsible accordion sections."),
        snippet: Some(
            r#"<details className="bg-secondary p-4 rounded"><summary>Question</summary><p>Answer</p></details>"#,
        ),
        preview: DemoPreview::Accordion,
    },
    ComponentDemo {
        id: "progress-bar",
        name: "Progress Bar",
        description: Some("Animated progress indicators."),
        snippet: Some(
            r#"<div className="bg-midgray h-2 rounded"><div className="bg-accent h-full w-1/2"></div></div>"#,
        ),
        preview: DemoPreview::ProgressBar { percent: 50 },
    },
    ComponentDemo {
        id: "tabs",
        name: "Tabs",
        description: Some("Tabbed interfaces for content switching."),
        snippet: Some(
            r#"<div className="flex"><button className="bg-accent p-2">Tab 1</button><button className="bg-secondary p-2">Tab 2</button></div>"#,
        ),
        preview: DemoPreview::Tabs,
    },
];

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

pub const HOME_SHOWCASE: [ComponentDemo; 5] = [
    ComponentDemo {
        id: "interactive-button",
        name: "Interactive Button",
        description: None,
        snippet: None,
        preview: DemoPreview::InteractiveButton,
    },
    ComponentDemo {
        id: "elevated-card",
        name: "Elevated Card",
        description: None,
        snippet: None,
        preview: DemoPreview::ElevatedCard,
    },
    ComponentDemo {
        id: "smart-input",
        name: "Smart Input",
        description: None,
        snippet: None,
        preview: DemoPreview::SmartInput,
    },
    ComponentDemo {
        id: "showcase-progress-bar",
        name: "Progress Bar",
        description: None,
        snippet: None,
        preview: DemoPreview::ProgressBar { percent: 70 },
    },
    ComponentDemo {
        id: "avatar",
        name: "Avatar",
        description: None,
        snippet: None,
        preview: DemoPreview::Avatar,
    },
];

pub const CORE_INNOVATIONS: [Feature; 5] = [
    Feature {
        title: "Adaptive Interfaces",
        description: "Fluid designs that evolve with user interactions, powered by advanced responsiveness.",
        icon: FeatureIcon::Check,
    },
    Feature {
        title: "Immersive Dynamics",
        description: "Captivating animations that bring your UI to life with seamless motion.",
        icon: FeatureIcon::Check,
    },
    Feature {
        title: "Intuitive Customization",
        description: "Effortless tailoring with modular classes for rapid prototyping.",
        icon: FeatureIcon::Check,
    },
    Feature {
        title: "Dark Theme Mastery",
        description: "Optimized for low-light environments with high contrast and readability.",
        icon: FeatureIcon::Check,
    },
    Feature {
        title: "Performance Optimized",
        description: "Lightweight components that load fast without sacrificing functionality.",
        icon: FeatureIcon::Check,
    },
];

pub const WHY_CHOOSE: [Feature; 3] = [
    Feature {
        title: "Developer-Friendly",
        description: "Easy integration with Leptos, Axum, and Tailwind.",
        icon: FeatureIcon::Code,
    },
    Feature {
        title: "Community Driven",
        description: "Built with feedback from thousands of developers.",
        icon: FeatureIcon::Users,
    },
    Feature {
        title: "Future-Proof",
        description: "Regular updates to keep up with web trends.",
        icon: FeatureIcon::Rocket,
    },
];

pub const HOME_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        tier: "Essential",
        price: "$0",
        features: &[
            "Core components access",
            "Forum assistance",
            "Basic documentation",
            "Community updates",
        ],
        variant: CardVariant::Default,
    },
    PricingPlan {
        tier: "Advanced",
        price: "$39/mo",
        features: &[
            "Full library",
            "Dedicated support",
            "Bespoke designs",
            "Priority updates",
            "Custom animations",
        ],
        variant: CardVariant::Highlighted,
    },
    PricingPlan {
        tier: "Corporate",
        price: "Inquire",
        features: &[
            "Enterprise scalability",
            "Custom team",
            "API enhancements",
            "On-site training",
            "Exclusive components",
        ],
        variant: CardVariant::Default,
    },
];

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "Revolutionized our design process with futuristic flair!",
        author: "Alex Rivera, Tech Visionary",
        rating: 5,
    },
    Testimonial {
        quote: "A blend of nostalgia and modernity that's truly inspiring.",
        author: "Morgan Lee, Creative Director",
        rating: 5,
    },
    Testimonial {
        quote: "These components saved us weeks of development time.",
        author: "Sam Taylor, Developer Lead",
        rating: 5,
    },
    Testimonial {
        quote: "Perfect for dark mode apps, sleek and professional.",
        author: "Jordan Kim, UI Designer",
        rating: 5,
    },
];

// ---------------------------------------------------------------------------
// Pricing page
// ---------------------------------------------------------------------------

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        tier: "Basic",
        price: "$0",
        features: &[
            "Access to free components",
            "Community support",
            "Basic documentation",
            "Limited animations",
        ],
        variant: CardVariant::Default,
    },
    PricingPlan {
        tier: "Pro",
        price: "$29/mo",
        features: &[
            "All components",
            "Priority support",
            "Custom themes",
            "Advanced animations",
            "Monthly updates",
        ],
        variant: CardVariant::Highlighted,
    },
    PricingPlan {
        tier: "Enterprise",
        price: "Contact Us",
        features: &[
            "Unlimited access",
            "Dedicated team",
            "API integration",
            "Custom development",
            "On-site training",
        ],
        variant: CardVariant::Default,
    },
];

pub const PRICING_FAQ: [FaqEntry; 3] = [
    FaqEntry {
        question: "Can I upgrade later?",
        answer: "Yes, anytime.",
    },
    FaqEntry {
        question: "Is there a trial?",
        answer: "Pro plan has a 14-day trial.",
    },
    FaqEntry {
        question: "Payment methods:",
        answer: "Credit card, PayPal.",
    },
];

// ---------------------------------------------------------------------------
// Help, About and Contact pages
// ---------------------------------------------------------------------------

pub const HELP_FAQ: [FaqEntry; 7] = [
    FaqEntry {
        question: "How do I install the components?",
        answer: "Copy the code snippet into your Tailwind project. The reveal animations ship with the site runtime.",
    },
    FaqEntry {
        question: "Are the components responsive?",
        answer: "Yes, all components are built with Tailwind's responsive utilities.",
    },
    FaqEntry {
        question: "Can I customize the colors?",
        answer: "Absolutely, override the theme colors in your Tailwind config.",
    },
    FaqEntry {
        question: "What if I need custom components?",
        answer: "Contact us for bespoke development services.",
    },
    FaqEntry {
        question: "Is there a refund policy?",
        answer: "Yes, 30-day money-back guarantee on all plans.",
    },
    FaqEntry {
        question: "How often are components updated?",
        answer: "Monthly updates with new components and improvements.",
    },
    FaqEntry {
        question: "Do you support light themes?",
        answer: "Currently focused on dark themes, but light mode support is in the roadmap.",
    },
];

pub const MILESTONES: [Milestone; 3] = [
    Milestone {
        year: 2023,
        summary: "Founded with a vision for better UI components.",
    },
    Milestone {
        year: 2024,
        summary: "Launched first set of animated components.",
    },
    Milestone {
        year: 2025,
        summary: "Expanded to enterprise solutions.",
    },
];

pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "John Doe",
        role: "Founder & CEO",
        bio: "Passionate about UI/UX and Tailwind CSS.",
    },
    TeamMember {
        name: "Jane Smith",
        role: "Lead Designer",
        bio: "Expert in animations and dark themes.",
    },
    TeamMember {
        name: "Alex Johnson",
        role: "Developer",
        bio: "Specializes in Rust and WebAssembly.",
    },
];

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        channel: ContactChannel::Email,
        value: "support@tailwindui.com",
    },
    ContactDetail {
        channel: ContactChannel::Phone,
        value: "+1 (555) 123-4567",
    },
    ContactDetail {
        channel: ContactChannel::Address,
        value: "123 UI Street, Design City, 90210",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_library_has_nine_unique_entries() {
        assert_eq!(COMPONENT_LIBRARY.len(), 9);

        let ids: HashSet<_> = COMPONENT_LIBRARY
            .iter()
            .chain(HOME_SHOWCASE.iter())
            .map(|demo| demo.id)
            .collect();
        assert_eq!(ids.len(), COMPONENT_LIBRARY.len() + HOME_SHOWCASE.len());
    }

    #[test]
    fn test_library_entries_carry_their_own_code() {
        for demo in COMPONENT_LIBRARY {
            assert!(demo.snippet.is_some(), "{} has no snippet", demo.name);
            assert_ne!(demo.description(), ComponentDemo::DEFAULT_DESCRIPTION);
        }
    }

    #[test]
    fn test_showcase_falls_back_to_sample_code() {
        let avatar = HOME_SHOWCASE[4];
        assert_eq!(avatar.description(), ComponentDemo::DEFAULT_DESCRIPTION);
        assert_eq!(
            avatar.code(),
            "// Sample Avatar code\n<avatar className=\"bg-primary text-light ...\" />"
        );
    }

    #[test]
    fn test_exactly_one_highlighted_plan_per_table() {
        for plans in [PRICING_PLANS, HOME_PLANS] {
            let highlighted = plans.iter().filter(|p| p.variant.is_highlighted()).count();
            assert_eq!(highlighted, 1);
        }
        assert_eq!(PRICING_PLANS[1].choose_message(), "Choose Pro Plan (Placeholder)");
    }

    #[test]
    fn test_help_faq_has_seven_entries() {
        assert_eq!(HELP_FAQ.len(), 7);
        assert!(HELP_FAQ.iter().all(|faq| faq.question.ends_with('?')));
    }

    #[test]
    fn test_entries_serialize() {
        let json = serde_json::to_value(PRICING_PLANS[1]).unwrap();
        assert_eq!(json["tier"], "Pro");
        assert_eq!(json["variant"], "Highlighted");
    }
}
