//! Form inputs and the submit flow shared by the placeholder forms.

use std::time::Duration;

use leptos::prelude::*;

use crate::core::forms::{FormFields, FormKind, LoggingSink, Notifier};
use crate::core::motion::VisualState;
use crate::ui::icon::Icon;
use crate::ui::notifications::{NotificationManager, use_notifications};

const INPUT_CLASS: &str = "bg-transparent border-b-2 border-accent p-3 text-light placeholder-midgray focus:border-primary focus:outline-none w-full rounded-none transition-transform focus:scale-[1.02]";

/// Submit state of one placeholder form.
///
/// Submitting validates the fields, fades the form out, then hands the
/// fields to the logging sink and posts the acknowledgment as a toast.
#[derive(Clone, Copy)]
pub struct PlaceholderForm {
    kind: FormKind,
    state: RwSignal<VisualState>,
    submitting: RwSignal<bool>,
    notifier: NotificationManager,
}

impl PlaceholderForm {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            state: RwSignal::new(VisualState::VISIBLE),
            submitting: RwSignal::new(false),
            notifier: use_notifications(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Inline style carrying the fade.
    pub fn style(&self) -> String {
        fade_style(&self.state.get(), self.kind.fade_ms())
    }

    pub fn submit(&self, fields: FormFields) {
        if self.submitting.get_untracked() {
            return;
        }
        if let Err(err) = self.kind.validate(&fields) {
            self.notifier.notify(&self.kind.rejection(&err));
            return;
        }

        let form = *self;
        form.submitting.set(true);
        form.state.set(form.kind.faded_state());
        set_timeout(
            move || {
                if let Err(err) = form.kind.submit(fields, &LoggingSink, &form.notifier) {
                    form.notifier.notify(&form.kind.rejection(&err));
                }
                form.state.set(VisualState::VISIBLE);
                form.submitting.set(false);
            },
            Duration::from_millis(form.kind.fade_ms()),
        );
    }
}

fn fade_style(state: &VisualState, fade_ms: u64) -> String {
    format!(
        "{} transition: opacity {fade_ms}ms ease-out, transform {fade_ms}ms ease-out;",
        state.to_style()
    )
}

/// Underlined input with an optional leading icon
#[component]
pub fn FormField(
    /// Name the value is submitted under
    name: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    placeholder: &'static str,
    /// Leading icon path, see [`icons`](crate::ui::icon::icons)
    #[prop(optional)]
    icon: Option<&'static str>,
    value: RwSignal<String>,
    #[prop(default = true)] required: bool,
) -> impl IntoView {
    let class = if icon.is_some() {
        format!("{} pl-12", INPUT_CLASS)
    } else {
        INPUT_CLASS.to_string()
    };

    view! {
        <div class="relative">
            {icon.map(|path| view! {
                <span class="absolute top-3.5 left-4 text-accent">
                    <Icon name=path class="w-4 h-4" />
                </span>
            })}
            <input
                type=input_type
                name=name
                class=class
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    name: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(default = true)] required: bool,
) -> impl IntoView {
    view! {
        <textarea
            name=name
            class=format!("{} h-32 resize-none", INPUT_CLASS)
            placeholder=placeholder
            required=required
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

/// Checkbox form field component
#[component]
pub fn CheckboxField(
    name: &'static str,
    checked: RwSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <input
                type="checkbox"
                id=name
                name=name
                class="appearance-none w-5 h-5 border-2 border-accent rounded-md checked:bg-accent checked:border-transparent focus:outline-none cursor-pointer"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <label for=name class="text-light text-sm">
                {children()}
            </label>
        </div>
    }
}

/// Collect field values into the map handed to [`PlaceholderForm::submit`].
pub fn collect_fields(fields: &[(&'static str, RwSignal<String>)]) -> FormFields {
    fields
        .iter()
        .map(|(name, value)| (*name, value.get_untracked()))
        .collect()
}

/// Value submitted for a checkbox: `"on"` when checked, blank otherwise.
pub fn checkbox_value(checked: bool) -> &'static str {
    if checked { "on" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_fields_reads_every_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let email = RwSignal::new("ada@example.com".to_string());
            let password = RwSignal::new(String::new());

            let fields = collect_fields(&[("email", email), ("password", password)]);

            assert_eq!(fields.get("email"), Some("ada@example.com"));
            assert_eq!(fields.get("password"), Some(""));
            assert!(FormKind::SignIn.validate(&fields).is_err());
        });
    }

    #[test]
    fn test_unchecked_box_fails_required_check() {
        let fields = FormFields::new()
            .with("username", "ada")
            .with("email", "ada@example.com")
            .with("password", "x")
            .with("confirm_password", "x")
            .with("terms", checkbox_value(false));
        assert!(FormKind::SignUp.validate(&fields).is_err());

        let fields = fields.with("terms", checkbox_value(true));
        assert!(FormKind::SignUp.validate(&fields).is_ok());
    }

    #[test]
    fn test_sign_up_fade_shrinks_the_form() {
        let style = fade_style(&FormKind::SignUp.faded_state(), FormKind::SignUp.fade_ms());
        assert!(style.starts_with("opacity: 0.300;"));
        assert!(style.contains("scale(0.980)"));
        assert!(style.ends_with("transition: opacity 500ms ease-out, transform 500ms ease-out;"));

        let idle = fade_style(&VisualState::VISIBLE, FormKind::Newsletter.fade_ms());
        assert!(idle.starts_with("opacity: 1.000;"));
        assert!(idle.contains("300ms"));
    }
}
