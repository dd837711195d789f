use log::debug;
use yew::prelude::*;

/// Icons the page knows how to draw. Outlines follow the 24x24 stroke style of the Lucide set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Music,
    Shield,
    Zap,
    Radio,
    Coins,
    Twitter,
    MessageCircle,
    Instagram,
    Github,
    Mail,
    Heart,
    ArrowRight,
}

enum Shape {
    Path(&'static str),
    Circle(f32, f32, f32),
    Rect { x: f32, y: f32, width: f32, height: f32, rx: f32 },
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Icon::Music,
        Icon::Shield,
        Icon::Zap,
        Icon::Radio,
        Icon::Coins,
        Icon::Twitter,
        Icon::MessageCircle,
        Icon::Instagram,
        Icon::Github,
        Icon::Mail,
        Icon::Heart,
        Icon::ArrowRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::Music => "Music",
            Icon::Shield => "Shield",
            Icon::Zap => "Zap",
            Icon::Radio => "Radio",
            Icon::Coins => "Coins",
            Icon::Twitter => "Twitter",
            Icon::MessageCircle => "MessageCircle",
            Icon::Instagram => "Instagram",
            Icon::Github => "Github",
            Icon::Mail => "Mail",
            Icon::Heart => "Heart",
            Icon::ArrowRight => "ArrowRight",
        }
    }

    /// Exact, case-sensitive lookup by symbolic name.
    pub fn from_name(name: &str) -> Option<Icon> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }

    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::Music => &[
                Shape::Path("M9 18V5l12-2v13"),
                Shape::Circle(6.0, 18.0, 3.0),
                Shape::Circle(18.0, 16.0, 3.0),
            ],
            Icon::Shield => &[Shape::Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z")],
            Icon::Zap => &[Shape::Path("M13 2 3 14h9l-1 8 10-12h-9l1-8z")],
            Icon::Radio => &[
                Shape::Circle(12.0, 12.0, 2.0),
                Shape::Path("M16.24 7.76a6 6 0 0 1 0 8.49m-8.48-.01a6 6 0 0 1 0-8.49m11.31-2.82a10 10 0 0 1 0 14.14m-14.14 0a10 10 0 0 1 0-14.14"),
            ],
            Icon::Coins => &[
                Shape::Circle(8.0, 8.0, 6.0),
                Shape::Path("M18.09 10.37A6 6 0 1 1 10.34 18"),
                Shape::Path("M7 6h1v4"),
                Shape::Path("m16.71 13.88.7.71-2.82 2.82"),
            ],
            Icon::Twitter => &[Shape::Path(
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            )],
            Icon::MessageCircle => &[Shape::Path("M7.9 20A9 9 0 1 0 4 16.1L2 22Z")],
            Icon::Instagram => &[
                Shape::Rect { x: 2.0, y: 2.0, width: 20.0, height: 20.0, rx: 5.0 },
                Shape::Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
                Shape::Path("M17.5 6.5h.01"),
            ],
            Icon::Github => &[
                Shape::Path("M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"),
                Shape::Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            Icon::Mail => &[
                Shape::Rect { x: 2.0, y: 4.0, width: 20.0, height: 16.0, rx: 2.0 },
                Shape::Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Icon::Heart => &[Shape::Path(
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            )],
            Icon::ArrowRight => &[Shape::Path("M5 12h14"), Shape::Path("m12 5 7 7-7 7")],
        }
    }

    pub fn render(self, class: Classes) -> Html {
        html! {
            <svg
                class={class}
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { for self.shapes().iter().map(|shape| match shape {
                    Shape::Path(d) => html! { <path d={*d} /> },
                    Shape::Circle(cx, cy, r) => html! {
                        <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
                    },
                    Shape::Rect { x, y, width, height, rx } => html! {
                        <rect
                            x={x.to_string()}
                            y={y.to_string()}
                            width={width.to_string()}
                            height={height.to_string()}
                            rx={rx.to_string()}
                        />
                    },
                }) }
            </svg>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Draws the icon registered under `name`, or nothing if the name is unknown.
#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    match Icon::from_name(&props.name) {
        Some(icon) => icon.render(props.class.clone()),
        None => {
            debug!("Skipping unknown icon name: {}", props.name);
            html! {}
        }
    }
}
