use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::animation::options::RevealOptions;
use crate::animation::reveal::{use_reveal, RevealScope};
use crate::gallery::items::{GalleryItem, GALLERY_ITEMS};
use crate::gallery::lightbox::{Lightbox, LightboxAction};
use crate::gallery::scroll_lock;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let header_ref = use_node_ref();
    let grid_ref = use_node_ref();
    let lightbox = use_reducer(|| Lightbox::new(GALLERY_ITEMS.len()));

    use_reveal(
        header_ref.clone(),
        RevealScope::Children,
        RevealOptions::rise(60.0).with_stagger(0.2),
    );
    use_reveal(
        grid_ref.clone(),
        RevealScope::Children,
        RevealOptions::rise(60.0).with_scale(0.8).with_stagger(0.1),
    );

    // Keyboard listener and scroll lock live exactly as long as the overlay is open.
    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with_deps(
            move |open: &bool| {
                let open = *open;
                let mut listener = None;
                if open {
                    scroll_lock::lock();
                    if let Some(document) = window().and_then(|w| w.document()) {
                        let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if let Some(action) = LightboxAction::from_key(&e.key()) {
                                e.prevent_default();
                                dispatcher.dispatch(action);
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>);
                        match document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref()) {
                            Ok(()) => listener = Some((document, on_key)),
                            Err(e) => warn!("Failed to attach lightbox keyboard listener: {:?}", e),
                        }
                    }
                }
                move || {
                    if let Some((document, on_key)) = listener {
                        let _ = document.remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
                    }
                    if open {
                        scroll_lock::unlock();
                    }
                }
            },
            lightbox.is_open(),
        );
    }

    let dispatch = |action: LightboxAction| {
        let lightbox = lightbox.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let LightboxAction::Select(index) = action {
                info!("Opening lightbox at image {}", index);
            } else if action == LightboxAction::Close {
                info!("Closing lightbox");
            }
            lightbox.dispatch(action);
        })
    };

    html! {
        <>
            <section id="gallery" class="gallery-section">
                <div class="section-inner">
                    <div ref={header_ref} class="section-header">
                        <h2>{"Our "}<span class="text-primary">{"Gallery"}</span></h2>
                        <p>
                            {"Experience the quality and professionalism of Mtseku Transport through our collection of services, fleet, and memorable moments captured across South Africa."}
                        </p>
                    </div>

                    <div ref={grid_ref} class="gallery-grid">
                        {
                            GALLERY_ITEMS.iter().enumerate().map(|(index, item)| html! {
                                <div key={index} class="gallery-item" onclick={dispatch(LightboxAction::Select(index))}>
                                    <div class="gallery-image">
                                        <img src={item.image} alt={item.title} />
                                    </div>
                                    <div class="gallery-shade"></div>
                                    <div class="gallery-caption">
                                        <div class="gallery-category">{item.category}</div>
                                        <h3>{item.title}</h3>
                                        <p>{item.description}</p>
                                    </div>
                                    <div class="gallery-zoom">{"⤢"}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            {
                match lightbox.selected() {
                    Some(index) => html! {
                        <LightboxOverlay
                            item={GALLERY_ITEMS[index].clone()}
                            position={lightbox.position_label().unwrap_or_default()}
                            on_close={dispatch(LightboxAction::Close)}
                            on_prev={dispatch(LightboxAction::Prev)}
                            on_next={dispatch(LightboxAction::Next)}
                        />
                    },
                    None => html! {},
                }
            }

            <style>
                {r#"
                .gallery-section {
                    padding: 5rem 0;
                    background: rgba(241, 245, 249, 0.3);
                }

                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .gallery-item {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    cursor: pointer;
                }

                .gallery-image {
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                }

                .gallery-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }

                .gallery-item:hover .gallery-image img {
                    transform: scale(1.1);
                }

                .gallery-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.2), transparent);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }

                .gallery-caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1.5rem;
                    color: #fff;
                    transform: translateY(100%);
                    transition: transform 0.5s ease;
                }

                .gallery-caption h3 {
                    font-size: 1.25rem;
                    margin: 0 0 0.5rem;
                }

                .gallery-caption p {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.9);
                    margin: 0;
                }

                .gallery-category {
                    font-size: 0.875rem;
                    color: var(--accent);
                    margin-bottom: 0.5rem;
                }

                .gallery-zoom {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .gallery-item:hover .gallery-shade,
                .gallery-item:hover .gallery-zoom {
                    opacity: 1;
                }

                .gallery-item:hover .gallery-caption {
                    transform: translateY(0);
                }

                @media (max-width: 1024px) {
                    .gallery-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 640px) {
                    .gallery-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxOverlayProps {
    pub item: GalleryItem,
    pub position: String,
    pub on_close: Callback<MouseEvent>,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(LightboxOverlay)]
pub fn lightbox_overlay(props: &LightboxOverlayProps) -> Html {
    let item = &props.item;

    html! {
        <div class="lightbox">
            // clicking anywhere outside the image and caption closes
            <div class="lightbox-backdrop" onclick={props.on_close.clone()}></div>

            <button class="lightbox-control lightbox-close" aria-label="Close" onclick={props.on_close.clone()}>
                {"✕"}
            </button>
            <button class="lightbox-control lightbox-prev" aria-label="Previous image" onclick={props.on_prev.clone()}>
                {"‹"}
            </button>
            <button class="lightbox-control lightbox-next" aria-label="Next image" onclick={props.on_next.clone()}>
                {"›"}
            </button>

            <div class="lightbox-content">
                <img src={item.image} alt={item.title} />
                <div class="lightbox-info">
                    <div class="lightbox-category">{item.category}</div>
                    <h3>{item.title}</h3>
                    <p>{item.description}</p>
                    <div class="lightbox-position">{&props.position}</div>
                </div>
            </div>

            <style>
                {r#"
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: rgba(0, 0, 0, 0.95);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .lightbox-backdrop {
                    position: absolute;
                    inset: 0;
                }

                .lightbox-control {
                    position: absolute;
                    z-index: 2;
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .lightbox-control:hover {
                    background: rgba(255, 255, 255, 0.3);
                }

                .lightbox-close {
                    top: 1.5rem;
                    right: 1.5rem;
                }

                .lightbox-prev,
                .lightbox-next {
                    top: 50%;
                    transform: translateY(-50%);
                }

                .lightbox-prev {
                    left: 1.5rem;
                }

                .lightbox-next {
                    right: 1.5rem;
                }

                .lightbox-content {
                    position: relative;
                    z-index: 1;
                    max-width: 64rem;
                    max-height: 80vh;
                    padding: 1.5rem;
                }

                .lightbox-content img {
                    width: 100%;
                    height: 100%;
                    max-height: 60vh;
                    object-fit: contain;
                    border-radius: 0.5rem;
                }

                .lightbox-info {
                    text-align: center;
                    margin-top: 1.5rem;
                    color: #fff;
                }

                .lightbox-info h3 {
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                }

                .lightbox-info p {
                    color: rgba(255, 255, 255, 0.9);
                    margin: 0;
                }

                .lightbox-category {
                    color: var(--accent);
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }

                .lightbox-position {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.875rem;
                    margin-top: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
