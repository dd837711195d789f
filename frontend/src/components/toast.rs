use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;

use crate::config;

/// Only the newest toast stays on screen.
pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShownToast {
    pub id: u32,
    pub toast: Toast,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastList {
    next_id: u32,
    pub shown: Vec<ShownToast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                next.shown.insert(0, ShownToast { id: next.next_id, toast });
                next.next_id = next.next_id.wrapping_add(1);
                next.shown.truncate(TOAST_LIMIT);
            }
            ToastAction::Dismiss(id) => {
                if !next.shown.iter().any(|s| s.id == id) {
                    return self;
                }
                next.shown.retain(|s| s.id != id);
            }
        }
        next.into()
    }
}

/// Handle for raising toasts, shared through context by `ToastProvider`.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    push: Callback<Toast>,
}

impl Toaster {
    pub fn toast(&self, toast: Toast) {
        self.push.emit(toast);
    }
}

impl From<Callback<Toast>> for Toaster {
    fn from(push: Callback<Toast>) -> Self {
        Self { push }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self {
            push: Callback::from(|toast: Toast| {
                warn!("No toast provider mounted, dropping toast: {} - {}", toast.title, toast.description);
            }),
        }
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);

    let push = {
        let dispatcher = list.dispatcher();
        use_callback(
            move |toast: Toast, _| dispatcher.dispatch(ToastAction::Push(toast)),
            (),
        )
    };
    let on_dismiss = {
        let dispatcher = list.dispatcher();
        use_callback(move |id: u32, _| dispatcher.dispatch(ToastAction::Dismiss(id)), ())
    };

    let toaster = Toaster { push };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            <style>
                {r#"
                    .toast-viewport {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 100;
                        max-width: 420px;
                        width: calc(100% - 3rem);
                    }
                    .toast {
                        position: relative;
                        padding: 1rem 2.5rem 1rem 1.25rem;
                        border-radius: 8px;
                        border: 1px solid rgba(57, 255, 20, 0.4);
                        background: rgba(0, 0, 0, 0.95);
                        color: #39ff14;
                        box-shadow: 0 0 20px rgba(57, 255, 20, 0.2);
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast.destructive {
                        border-color: rgba(239, 68, 68, 0.8);
                        background: rgba(127, 29, 29, 0.95);
                        color: #fff;
                    }
                    .toast-title {
                        font-weight: bold;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.9rem;
                        opacity: 0.9;
                    }
                    .toast-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <div class="toast-viewport">
                { for list.shown.iter().map(|shown| html! {
                    <ToastItem key={shown.id} id={shown.id} toast={shown.toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let ToastItemProps { id, toast, on_dismiss } = props;

    {
        let on_dismiss = on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::get_toast_duration_ms(), move || {
                    on_dismiss.emit(id);
                });
                // Dropping the timeout cancels it if the toast goes away first
                move || drop(timeout)
            },
            *id,
        );
    }

    let close = {
        let on_dismiss = on_dismiss.clone();
        let id = *id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = classes!("toast", (toast.variant == ToastVariant::Destructive).then(|| "destructive"));

    html! {
        <div class={class} role="status">
            <div class="toast-title">{ &toast.title }</div>
            <div class="toast-description">{ &toast.description }</div>
            <button class="toast-close" onclick={close} aria-label="Close">{"✕"}</button>
        </div>
    }
}
