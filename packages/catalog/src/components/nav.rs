use dioxus::prelude::*;

pub(crate) fn menu_class(open: bool) -> &'static str {
    if open {
        "nav-menu active"
    } else {
        "nav-menu"
    }
}

/// The top bar. On narrow screens the menu collapses behind the hamburger button.
#[component]
pub fn NavBar() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        nav { class: "navbar",
            a { class: "brand", href: "index.html", "Catalog" }
            button {
                class: "hamburger",
                onclick: move |_| open.toggle(),
                span { class: "bar" }
                span { class: "bar" }
                span { class: "bar" }
            }
            ul { class: menu_class(open()),
                li { a { href: "index.html", "Home" } }
                li { a { href: "index.html#container", "Products" } }
                li { a { href: "about.html", "About" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_class_toggles_active() {
        assert_eq!(menu_class(false), "nav-menu");
        assert_eq!(menu_class(true), "nav-menu active");
    }
}
