//! Sidebar menu with collapsible groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::*;
use crate::shared::icons::icon;
use crate::system::session::context::use_is_supervisor;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    supervisor_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "transactions",
            label: "Transactions",
            icon: "payments",
            items: vec![
                (DEPOSIT_QUEUE, "deposit"),
                (WITHDRAW_QUEUE, "withdraw"),
                (TRANSACTION_HISTORY, "history"),
            ],
            supervisor_only: false,
        },
        MenuGroup {
            id: "supervisor",
            label: "Supervisor",
            icon: "users",
            items: vec![(WITHDRAW_ASSIGN, "withdraw"), (CREDIT_BALANCE, "payments")],
            supervisor_only: true,
        },
        MenuGroup {
            id: "banks",
            label: "Banks",
            icon: "bank",
            items: vec![(MY_BANK, "bank"), (SMS, "sms")],
            supervisor_only: false,
        },
        MenuGroup {
            id: "services",
            label: "Services",
            icon: "settings",
            items: vec![
                (SERVICE_NAGAD, "payments"),
                (SERVICE_AUTOMATION, "settings"),
                (CRAWLER, "activity"),
                (AGENT_TRACKER, "users"),
            ],
            supervisor_only: false,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_supervisor = use_is_supervisor().get_untracked();

    let expanded_groups = RwSignal::new(vec!["transactions".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().filter(|g| is_supervisor || !g.supervisor_only).map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_chevron = group_id.clone();
                let gid_show = group_id;
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |open| {
                                    if let Some(pos) = open.iter().position(|x| x == &gid) {
                                        open.remove(pos);
                                    } else {
                                        open.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&gid_chevron))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&gid_show))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(key))
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
