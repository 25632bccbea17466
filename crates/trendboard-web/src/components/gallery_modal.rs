//! Item gallery modal

use crate::state::use_dashboard;
use leptos::prelude::*;
use trendboard_core::format::format_compact;
use trendboard_core::models::GalleryImage;
use trendboard_core::GalleryState;

/// Modal bound to the dashboard's gallery state; renders nothing when closed
#[component]
pub fn GalleryModal() -> impl IntoView {
    let state = use_dashboard();
    let close = move || state.close_gallery();

    move || {
        let gallery = state.gallery.get();
        let Some(item) = gallery.item().cloned() else {
            return view! {}.into_any();
        };

        let body = match gallery {
            GalleryState::Loading(_) => view! {
                <div class="loader-inline">
                    <div class="spinner"></div>
                    <p>"Loading images..."</p>
                </div>
            }
            .into_any(),
            GalleryState::Empty(_) => view! {
                <div class="empty-state">
                    <p>"No images found for this item."</p>
                </div>
            }
            .into_any(),
            GalleryState::Failed { message, .. } => view! {
                <div class="error-message">{format!("Failed to load images: {}", message)}</div>
            }
            .into_any(),
            GalleryState::Loaded { images, .. } => view! {
                <p class="gallery-count">{format!("{} images", images.len())}</p>
                <div class="gallery-grid">
                    {images
                        .into_iter()
                        .map(|image| view! { <GalleryTile image /> })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
            GalleryState::Closed => view! {}.into_any(),
        };

        view! {
            <div class="modal-overlay" id="itemGalleryModal" on:click=move |_| close()>
                <div class="modal-content gallery-modal" on:click=move |e| e.stop_propagation()>
                    <div class="modal-header">
                        <h2>{item.heading()}</h2>
                        <button class="modal-close" on:click=move |_| close()>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{body}</div>
                </div>
            </div>
        }
        .into_any()
    }
}

#[component]
fn GalleryTile(image: GalleryImage) -> impl IntoView {
    let caption = image.caption.clone();
    view! {
        <figure class="gallery-item">
            <img src=image.image_url() alt=caption.clone() loading="lazy" />
            <figcaption>
                <span class="gallery-user">{image.handle()}</span>
                <span class="gallery-stats">
                    {format!(
                        "♥ {}  💬 {}",
                        format_compact(image.likes_count.max(0) as u64),
                        format_compact(image.comments_count.max(0) as u64),
                    )}
                </span>
            </figcaption>
        </figure>
    }
}
