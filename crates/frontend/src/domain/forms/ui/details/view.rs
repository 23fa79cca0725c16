use super::view_model::WizardViewModel;
use contracts::domain::wizard_definition;
use contracts::enums::FormModule;
use contracts::shared::wizard::{FieldKind, FieldSpec, StepProgress};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabTarget;
use crate::shared::components::ui::{Button, Checkbox, FieldError, Input, Select, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::config::use_config;
use crate::shared::connectivity::use_connectivity;
use crate::shared::i18n::{use_i18n, I18nContext};
use crate::shared::toast::use_toast;

/// New-record wizard for any form module
#[component]
pub fn WizardPage(module: FormModule, on_close: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();

    let Some(definition) = wizard_definition(module) else {
        return view! {
            <div class="error">{move || i18n.t("form.error")}</div>
        }
        .into_any();
    };

    let config = use_config();
    let toast = use_toast();
    let connectivity = use_connectivity();
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let tab_key = TabTarget::Wizard(module).key();

    let vm = WizardViewModel::new(definition.clone());
    if vm.restore_draft(&config) {
        toast.info(i18n.t("form.draftRestored"));
    }

    // Inputs rebuild only when the page changes, not on every keystroke
    let step_index = Memo::new(move |_| vm.wizard.with(|w| w.current_step_index()));
    let steps = StoredValue::new(definition.steps().to_vec());

    let mark_dirty = {
        let tab_key = tab_key.clone();
        Callback::new(move |dirty: bool| tabs_store.set_dirty(&tab_key, dirty))
    };

    let on_submitted = {
        let tab_key = tab_key.clone();
        Callback::new(move |_| {
            tabs_store.set_dirty(&tab_key, false);
            tabs_store.open(TabTarget::Submissions(module));
        })
    };

    let on_next = {
        let config = config.clone();
        move |_| vm.next_command(config.clone(), i18n, toast, connectivity, on_submitted)
    };
    let on_previous = move |_| vm.previous_command();
    let on_save_draft = {
        let config = config.clone();
        move |_| {
            vm.save_draft_command(&config, i18n, toast);
            mark_dirty.run(false);
        }
    };
    let on_cancel = {
        let config = config.clone();
        move |_| {
            vm.cancel_command(&config);
            mark_dirty.run(false);
            on_close.run(());
        }
    };

    view! {
        <div class="page wizard">
            <PageHeader
                title=Signal::derive(move || i18n.t(&module.new_key()))
                subtitle=Signal::derive(move || Some(i18n.t(&module.subtitle_key())))
            >
                <Button variant="secondary" on_click=Callback::new(on_save_draft)>
                    {move || i18n.t("form.saveDraft")}
                </Button>
            </PageHeader>

            <StepIndicator vm=vm steps=steps i18n=i18n />

            {move || vm.draft_saved_at.get().map(|at| view! {
                <div class="wizard__draft-note">
                    {format!("{} {}", i18n.t("checklists.autosaved"), at.with_timezone(&chrono::Local).format("%H:%M"))}
                </div>
            })}

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form wizard__body">
                {move || {
                    let index = step_index.get();
                    steps.with_value(|steps| {
                        steps.get(index).map(|step| {
                            step.fields
                                .iter()
                                .cloned()
                                .map(|spec| render_field(vm, spec, i18n, mark_dirty))
                                .collect_view()
                        })
                    })
                }}
            </div>

            <div class="details-actions wizard__actions">
                <Button variant="ghost" on_click=Callback::new(on_cancel)>
                    {move || i18n.t("form.cancel")}
                </Button>
                <Show when=move || !vm.is_first_step()>
                    <Button variant="secondary" on_click=Callback::new(on_previous)>
                        {move || i18n.t("form.previous")}
                    </Button>
                </Show>
                <Button
                    disabled=Signal::derive(move || vm.is_submitting())
                    on_click=Callback::new(on_next.clone())
                >
                    {move || {
                        if vm.is_submitting() {
                            i18n.t("form.submitting")
                        } else if vm.is_last_step() {
                            i18n.t("form.submit")
                        } else {
                            i18n.t("form.next")
                        }
                    }}
                </Button>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn StepIndicator(
    vm: WizardViewModel,
    steps: StoredValue<Vec<contracts::shared::wizard::StepDefinition>>,
    i18n: I18nContext,
) -> impl IntoView {
    let titles = steps.with_value(|s| s.iter().map(|step| step.title.clone()).collect::<Vec<_>>());
    let total = titles.len();

    view! {
        <div class="wizard__progress">
            <div class="wizard__progress-label">
                {move || {
                    let current = vm.wizard.with(|w| w.current_step_index()) + 1;
                    format!("{} {} / {}", i18n.t("form.step"), current, total)
                }}
            </div>
            <ol class="wizard__steps">
                {titles.into_iter().enumerate().map(|(index, title)| {
                    let class = move || {
                        match vm.progress().get(index) {
                            Some(StepProgress::Completed) => "wizard__step wizard__step--completed",
                            Some(StepProgress::Current) => "wizard__step wizard__step--current",
                            _ => "wizard__step",
                        }
                    };
                    view! {
                        <li class=class>
                            <span class="wizard__step-number">{index + 1}</span>
                            <span class="wizard__step-title">{title}</span>
                        </li>
                    }
                }).collect_view()}
            </ol>
        </div>
    }
}

fn render_field(
    vm: WizardViewModel,
    spec: FieldSpec,
    i18n: I18nContext,
    mark_dirty: Callback<bool>,
) -> AnyView {
    let key = StoredValue::new(spec.key.clone());
    let label = if spec.is_required() {
        format!("{} *", spec.label)
    } else {
        spec.label.clone()
    };
    let placeholder = spec.placeholder.clone().unwrap_or_default();
    let value = Signal::derive(move || key.with_value(|k| vm.value(k)));
    let error = Signal::derive(move || {
        key.with_value(|k| vm.field_error(k).map(|e| i18n.validation(e)))
    });
    let on_input = Callback::new(move |raw: String| {
        key.with_value(|k| vm.set_input(k, &raw));
        mark_dirty.run(true);
    });

    match spec.kind {
        FieldKind::LongText => view! {
            <Textarea
                id=spec.key.clone()
                label=label
                placeholder=placeholder
                value=value
                on_input=on_input
                error=error
            />
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <div class="form__group">
                <Checkbox
                    id=spec.key.clone()
                    label=label
                    checked=Signal::derive(move || key.with_value(|k| vm.checked(k)))
                    on_change=Callback::new(move |checked: bool| {
                        key.with_value(|k| vm.set_value(k, checked.into()));
                        mark_dirty.run(true);
                    })
                />
                <FieldError message=error />
            </div>
        }
        .into_any(),
        FieldKind::Choice(options) => {
            let mut choices: Vec<(String, String)> =
                options.iter().map(|o| (o.clone(), o.clone())).collect();
            if spec.default.is_blank() {
                choices.insert(0, (String::new(), "-".to_string()));
            }
            view! {
                <Select
                    id=spec.key.clone()
                    label=label
                    value=value
                    options=choices
                    on_change=on_input
                    error=error
                />
            }
            .into_any()
        }
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Phone => "tel",
                FieldKind::Date => "date",
                FieldKind::Number => "number",
                _ => "text",
            };
            view! {
                <Input
                    id=spec.key.clone()
                    label=label
                    input_type=input_type
                    placeholder=placeholder
                    value=value
                    on_input=on_input
                    error=error
                />
            }
            .into_any()
        }
    }
}
