use dioxus::prelude::*;

use crate::vm::ResultVm;

#[component]
pub fn ResultScreenView(result: ResultVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        section { class: "result-screen",
            p { class: "result-type", "Your mood: {result.type_label}" }
            if result.has_track {
                img {
                    class: "result-art",
                    id: "result-album-art",
                    src: "{result.album_art_url}",
                    alt: "{result.album_art_alt}",
                }
            }
            h2 { id: "result-title", "{result.title}" }
            p { id: "result-artist", "{result.artist}" }
            if result.has_track {
                a {
                    id: "result-youtube-link",
                    href: "{result.link}",
                    target: "_blank",
                    "Listen on YouTube"
                }
            }
            div {
                button {
                    class: "primary",
                    id: "restart-button",
                    onclick: move |_| on_restart.call(()),
                    "Start over"
                }
            }
        }
    }
}
