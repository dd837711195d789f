use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())} style={props.style.clone()}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardPartProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CardHeader)]
pub fn card_header(props: &CardPartProps) -> Html {
    html! {
        <div class={classes!("card-header", props.class.clone())}>{ for props.children.iter() }</div>
    }
}

#[function_component(CardTitle)]
pub fn card_title(props: &CardPartProps) -> Html {
    html! {
        <h3 class={classes!("card-title", props.class.clone())}>{ for props.children.iter() }</h3>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &CardPartProps) -> Html {
    html! {
        <div class={classes!("card-content", props.class.clone())}>{ for props.children.iter() }</div>
    }
}

#[function_component(CardDescription)]
pub fn card_description(props: &CardPartProps) -> Html {
    html! {
        <p class={classes!("card-description", props.class.clone())}>{ for props.children.iter() }</p>
    }
}
