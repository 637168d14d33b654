use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub name: AttrValue,
    #[prop_or(72)]
    pub size: u32,
}

/// Circular initials badge used wherever a person or organization has no
/// photo.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let initials: String = props
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();

    let style = format!("width: {0}px; height: {0}px;", props.size);

    html! {
        <div class="avatar" {style} aria-hidden="true">
            <span>{initials}</span>
        </div>
    }
}
