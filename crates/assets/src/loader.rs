use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::future::try_join3;

use crate::error::TextureLoadError;
use crate::sources::{TextureSlot, TextureSources};
use crate::texture::{Texture, TextureSet};

/// Byte source for texture assets (HTTP in the browser, memory in tests).
pub trait FetchBytes {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, String>>;

    /// Give the host event loop a turn between CPU-heavy steps.
    fn yield_now(&self) -> impl Future<Output = ()> {
        YieldNow::default()
    }
}

/// Pending once, then ready. Wakes itself so an executor polls it again.
#[derive(Debug, Default)]
pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Fetch all three maps concurrently, then decode and downscale them one at
/// a time, yielding to the host before each step.
///
/// Resolves only when every slot succeeds; the first failure rejects the
/// whole set and the other in-flight fetches are dropped.
pub async fn load_texture_set<F: FetchBytes>(
    fetcher: &F,
    sources: &TextureSources,
    max_dim: u32,
) -> Result<TextureSet, TextureLoadError> {
    let (color, bump, specular) = try_join3(
        fetch_slot(fetcher, TextureSlot::Color, &sources.color),
        fetch_slot(fetcher, TextureSlot::Bump, &sources.bump),
        fetch_slot(fetcher, TextureSlot::Specular, &sources.specular),
    )
    .await?;

    let set = TextureSet {
        color: decode_slot(fetcher, TextureSlot::Color, &sources.color, &color, max_dim).await?,
        bump: decode_slot(fetcher, TextureSlot::Bump, &sources.bump, &bump, max_dim).await?,
        specular: decode_slot(
            fetcher,
            TextureSlot::Specular,
            &sources.specular,
            &specular,
            max_dim,
        )
        .await?,
    };
    tracing::info!(bytes = set.byte_len(), "texture set loaded");
    Ok(set)
}

async fn fetch_slot<F: FetchBytes>(
    fetcher: &F,
    slot: TextureSlot,
    path: &str,
) -> Result<Vec<u8>, TextureLoadError> {
    fetcher
        .fetch(path)
        .await
        .map_err(|e| TextureLoadError::fetch(slot, path, e))
}

async fn decode_slot<F: FetchBytes>(
    fetcher: &F,
    slot: TextureSlot,
    path: &str,
    bytes: &[u8],
    max_dim: u32,
) -> Result<Texture, TextureLoadError> {
    fetcher.yield_now().await;
    let texture =
        Texture::decode(path, bytes).map_err(|e| TextureLoadError::decode(slot, path, e.to_string()))?;
    fetcher.yield_now().await;
    let texture = texture.fit_within(max_dim);
    tracing::debug!(
        slot = slot.as_str(),
        width = texture.width,
        height = texture.height,
        "texture decoded"
    );
    Ok(texture)
}

mod web {
    use super::FetchBytes;
    use gloo_net::http::Request;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    /// Same-origin HTTP fetch through the browser's `fetch`. Only usable on
    /// wasm32; elsewhere the browser bindings are absent.
    #[derive(Debug, Default, Copy, Clone)]
    pub struct HttpFetcher;

    impl FetchBytes for HttpFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, String> {
            let resp = Request::get(url).send().await.map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(format!("HTTP {} {}", resp.status(), resp.status_text()));
            }
            resp.binary().await.map_err(|e| e.to_string())
        }

        /// `setTimeout(0)` so input, scroll and animation frames run before
        /// the next decode.
        async fn yield_now(&self) {
            let promise = js_sys::Promise::new(&mut |resolve, _| match web_sys::window() {
                Some(window) => {
                    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0);
                }
                None => {
                    let _ = resolve.call0(&JsValue::NULL);
                }
            });
            let _ = JsFuture::from(promise).await;
        }
    }
}

pub use web::HttpFetcher;
