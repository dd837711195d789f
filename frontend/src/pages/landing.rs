use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::icon::IconView;
use crate::components::toast::use_toaster;
use crate::content::{FEATURES, LOGO_URL, SOCIAL_LINKS, SUPPORT_URL};
use crate::flow::{self, FlowAction, SubmissionFlow};
use crate::signup::{MockSignup, SignupService};

fn default_signup_service() -> Rc<dyn SignupService> {
    Rc::new(MockSignup::default())
}

#[derive(Properties)]
pub struct LandingProps {
    #[prop_or_else(default_signup_service)]
    pub service: Rc<dyn SignupService>,
}

impl PartialEq for LandingProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.service, &other.service)
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub submitting: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class="par-button" disabled={props.submitting}>
            if props.submitting {
                <div class="spinner"></div>
                {"Joining..."}
            } else {
                <IconView name="Mail" class={classes!("icon-sm")} />
                {"Join Beta"}
                <IconView name="ArrowRight" class={classes!("icon-sm", "arrow")} />
            }
        </button>
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let form = use_reducer(SubmissionFlow::default);
    let toaster = use_toaster();

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FlowAction::Input(input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let toaster = toaster.clone();
        let service = props.service.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let dispatcher = form.dispatcher();
            let dispatch = Callback::from(move |action: FlowAction| dispatcher.dispatch(action));
            if let Some(pending) = flow::submit(&form.email, service.as_ref(), dispatch, toaster.clone()) {
                spawn_local(pending);
            }
        })
    };

    let submitting = form.is_submitting();

    html! {
        <div class="par-page">
            <style>
                {r#"
                    .par-page {
                        min-height: 100vh;
                        background: #000;
                        color: #39ff14;
                        font-family: 'Share Tech Mono', monospace;
                    }
                    .par-page .font-orbitron {
                        font-family: 'Orbitron', sans-serif;
                    }
                    .par-page .glow {
                        text-shadow: 0 0 10px rgba(57, 255, 20, 0.6), 0 0 20px rgba(57, 255, 20, 0.3);
                    }
                    .par-page .dim {
                        color: #2bbf10;
                    }
                    .par-page .bright {
                        color: #7dff5c;
                    }
                    .par-header {
                        text-align: center;
                        padding: 3rem 1rem;
                    }
                    .par-header img {
                        max-width: 300px;
                        width: 100%;
                        margin: 0 auto 1.5rem;
                        filter: brightness(1.1) drop-shadow(0 0 20px rgba(57, 255, 20, 0.3));
                    }
                    .par-header h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .par-header h2 {
                        font-size: 1.5rem;
                        margin-bottom: 0.5rem;
                    }
                    .par-header p {
                        font-size: 1.2rem;
                        font-style: italic;
                    }
                    .par-section {
                        margin: 0 auto 4rem;
                        padding: 0 1rem;
                    }
                    .par-intro {
                        max-width: 56rem;
                        text-align: center;
                        line-height: 1.7;
                        font-size: 1.1rem;
                    }
                    .par-features {
                        max-width: 72rem;
                    }
                    .par-features > h2 {
                        font-size: 2.25rem;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .card {
                        border: 1px solid rgba(57, 255, 20, 0.3);
                        border-radius: 12px;
                        background: rgba(57, 255, 20, 0.03);
                        transition: transform 0.3s, box-shadow 0.3s;
                        animation: fadeUp 0.6s ease-out both;
                    }
                    .feature-card:hover {
                        transform: scale(1.02);
                        box-shadow: 0 0 25px rgba(57, 255, 20, 0.35);
                    }
                    .card-header {
                        padding: 1.5rem 1.5rem 1rem;
                    }
                    .card-content {
                        padding: 0 1.5rem 1.5rem;
                    }
                    .card-title {
                        font-size: 1.1rem;
                        margin: 0;
                    }
                    .card-description {
                        font-size: 0.9rem;
                        line-height: 1.6;
                        margin: 0;
                    }
                    .feature-heading {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .icon-badge {
                        padding: 0.5rem;
                        border-radius: 8px;
                        background: rgba(57, 255, 20, 0.1);
                        display: flex;
                    }
                    .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .icon-sm {
                        width: 1rem;
                        height: 1rem;
                    }
                    .par-cta {
                        max-width: 42rem;
                    }
                    .par-cta .card {
                        padding: 2rem;
                        text-align: center;
                    }
                    .par-cta h2 {
                        font-size: 1.9rem;
                        margin-bottom: 1rem;
                    }
                    .signup-form {
                        display: flex;
                        gap: 1rem;
                        margin: 2rem 0 1.5rem;
                    }
                    .signup-input {
                        flex: 1;
                        padding: 0.75rem 1rem;
                        background: #000;
                        color: #39ff14;
                        border: 1px solid rgba(57, 255, 20, 0.4);
                        border-radius: 8px;
                        font-family: inherit;
                    }
                    .signup-input:focus {
                        outline: none;
                        border-color: #39ff14;
                        box-shadow: 0 0 10px rgba(57, 255, 20, 0.4);
                    }
                    .par-button, .par-button-outline {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 8px;
                        font-family: 'Orbitron', sans-serif;
                        font-weight: bold;
                        cursor: pointer;
                        text-decoration: none;
                        transition: all 0.3s;
                    }
                    .par-button {
                        background: #39ff14;
                        color: #000;
                        border: none;
                    }
                    .par-button:disabled {
                        opacity: 0.7;
                        cursor: not-allowed;
                    }
                    .par-button-outline {
                        background: transparent;
                        color: #39ff14;
                        border: 1px solid #39ff14;
                    }
                    .par-button-outline:hover .heart {
                        color: #ef4444;
                    }
                    .par-button:hover .arrow {
                        transform: translateX(4px);
                    }
                    .arrow, .heart {
                        transition: all 0.3s;
                    }
                    .spinner {
                        width: 1rem;
                        height: 1rem;
                        border-radius: 50%;
                        border-bottom: 2px solid #000;
                        animation: spin 1s linear infinite;
                    }
                    .support-row {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        align-items: center;
                    }
                    .par-footer {
                        border-top: 1px solid rgba(57, 255, 20, 0.2);
                        padding: 3rem 1rem;
                        text-align: center;
                    }
                    .par-footer h3 {
                        font-size: 1.25rem;
                        margin-bottom: 1.5rem;
                    }
                    .social-links {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .social-link {
                        display: flex;
                        padding: 0.75rem;
                        border-radius: 8px;
                        border: 1px solid rgba(57, 255, 20, 0.3);
                        color: #39ff14;
                        transition: all 0.3s;
                    }
                    .social-link:hover {
                        border-color: #39ff14;
                        background: rgba(57, 255, 20, 0.1);
                        transform: scale(1.1);
                        box-shadow: 0 0 25px rgba(57, 255, 20, 0.35);
                    }
                    .copyright {
                        font-size: 0.85rem;
                    }
                    @keyframes fadeUp {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    @media (max-width: 1024px) {
                        .feature-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .feature-grid {
                            grid-template-columns: 1fr;
                        }
                        .signup-form, .support-row {
                            flex-direction: column;
                        }
                        .par-header h1 {
                            font-size: 2.25rem;
                        }
                    }
                "#}
            </style>

            <header class="par-header">
                <img src={LOGO_URL} alt="P.A.R. Logo" />
                <h1 class="font-orbitron glow">{"Post Apocalyptic Radio"}</h1>
                <h2 class="font-orbitron bright">{"(P.A.R.)"}</h2>
                <p class="dim">{"Your Decentralized, Social Music Frontier"}</p>
            </header>

            <section class="par-section par-intro">
                <p>
                    {"Imagine a world where music isn't controlled by a few central platforms, but by the artists and communities who love it. "}
                    {"That's the vision behind "}
                    <strong class="bright">{"Post Apocalyptic Radio (P.A.R.)"}</strong>
                    {" – a new kind of music streaming experience built for the decentralized future."}
                </p>
            </section>

            <section class="par-section par-features">
                <h2 class="font-orbitron glow">{"What Makes P.A.R. Unique?"}</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <Card
                            key={feature.id}
                            class={classes!("feature-card")}
                            style={format!("animation-delay: {}s;", index as f32 * 0.1)}
                        >
                            <CardHeader>
                                <div class="feature-heading">
                                    <div class="icon-badge">
                                        <IconView name={feature.icon} class={classes!("icon")} />
                                    </div>
                                    <CardTitle class={classes!("font-orbitron")}>{ feature.title }</CardTitle>
                                </div>
                            </CardHeader>
                            <CardContent>
                                <CardDescription class={classes!("dim")}>{ feature.description }</CardDescription>
                            </CardContent>
                        </Card>
                    }) }
                </div>
            </section>

            <section class="par-section par-cta">
                <Card>
                    <h2 class="font-orbitron glow">{"Join the Revolution"}</h2>
                    <p class="dim">
                        {"Be among the first to experience the future of decentralized music streaming. "}
                        {"Sign up for early beta access and help shape the soundtrack of tomorrow."}
                    </p>

                    <form class="signup-form" {onsubmit}>
                        <input
                            class="signup-input"
                            type="email"
                            placeholder="Enter your email address"
                            value={form.email.clone()}
                            {oninput}
                        />
                        <SubmitButton {submitting} />
                    </form>

                    <div class="support-row">
                        <span class="dim">{"or"}</span>
                        <a class="par-button-outline" href={SUPPORT_URL} target="_blank" rel="noopener noreferrer">
                            <IconView name="Heart" class={classes!("icon-sm", "heart")} />
                            {"Support on Ko-fi"}
                        </a>
                    </div>
                </Card>
            </section>

            <footer class="par-footer">
                <h3 class="font-orbitron glow">{"Follow the Signal"}</h3>
                <div class="social-links">
                    { for SOCIAL_LINKS.iter().map(|social| html! {
                        <a
                            key={social.name}
                            class="social-link"
                            href={social.url}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={social.name}
                        >
                            <IconView name={social.icon} class={classes!("icon")} />
                        </a>
                    }) }
                </div>
                <p class="copyright dim">{"P.A.R. © 2025 - Building the Future of Decentralized Music"}</p>
            </footer>
        </div>
    }
}
