use contracts::domain::common::YesNo;
use leptos::prelude::*;

/// Button that flips a `Y`/`N` flag on every click.
#[component]
pub fn YesNoToggle(
    #[prop(into)] value: Signal<YesNo>,
    on_change: Callback<YesNo>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Shown on hover while disabled
    #[prop(optional, into)]
    disabled_title: MaybeProp<String>,
    /// Field name used for error highlighting
    #[prop(optional, into)]
    name: MaybeProp<String>,
    #[prop(optional, into)] invalid: MaybeProp<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <button
            type="button"
            name=move || name.get()
            class=move || {
                let state = if value.get().is_yes() { "yes-no--yes" } else { "yes-no--no" };
                let err = if invalid.get().unwrap_or(false) { " input--error" } else { "" };
                format!("yes-no {}{}", state, err)
            }
            disabled=is_disabled
            title=move || if is_disabled() { disabled_title.get() } else { None }
            on:click=move |_| on_change.run(value.get_untracked().toggled())
        >
            {move || value.get().label()}
        </button>
    }
}
