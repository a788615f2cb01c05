use birthday_core::{SceneError, SceneHooks, SceneResult};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::*;
use crate::dom;

/// Scene hooks bound to the page markup.
pub struct DomHooks {
    document: web::Document,
}

impl DomHooks {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn media(&self, id: &str) -> Option<web::HtmlMediaElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok())
    }
}

/// Starts playback; a rejected play() promise is logged, not propagated.
fn play(media: &web::HtmlMediaElement, label: &'static str) -> SceneResult<()> {
    let promise = media
        .play()
        .map_err(|e| SceneError::MediaPlayback(format!("{}: {:?}", label, e)))?;
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("{} playback rejected: {:?}", label, e);
        }
    });
    Ok(())
}

impl SceneHooks for DomHooks {
    fn show_final_scene(&mut self) {
        if let Some(el) = self.document.get_element_by_id(INITIAL_STATE_ID) {
            dom::set_hidden(&el, true);
        }
        if let Some(el) = dom::html_element(&self.document, FINAL_STATE_ID) {
            dom::set_hidden(&el, false);
            dom::set_style(&el, "opacity", "1");
        }
    }

    fn hide_effects(&mut self) {
        if let Some(el) = dom::html_element(&self.document, FX_CANVAS_ID) {
            dom::set_style(&el, "display", "none");
        }
    }

    fn start_media(&mut self) -> SceneResult<()> {
        let music = self
            .media(BG_MUSIC_ID)
            .ok_or_else(|| SceneError::MediaPlayback(format!("missing #{}", BG_MUSIC_ID)))?;
        let music_result = play(&music, "music");
        if let Some(video) = self.media(VIDEO_ID) {
            if let Err(e) = play(&video, "video") {
                log::warn!("{}", e);
            }
        }
        music_result
    }

    fn show_mic_denied(&mut self, error: &SceneError) {
        log::warn!("{}", error);
        if let Some(el) = dom::html_element(&self.document, MIC_STATUS_ID) {
            dom::set_hidden(&el, false);
            dom::set_style(&el, "color", MIC_DENIED_COLOR);
            el.set_inner_html(MIC_DENIED_HTML);
        }
    }

    fn hide_mic_status(&mut self) {
        if let Some(el) = self.document.get_element_by_id(MIC_STATUS_ID) {
            dom::set_hidden(&el, true);
        }
    }
}

/// Mobile browsers only allow playback after a gesture: play and immediately
/// pause the music, and preload the video.
fn unlock_media(document: &web::Document) {
    if let Some(music) = document
        .get_element_by_id(BG_MUSIC_ID)
        .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok())
    {
        match music.play() {
            Ok(promise) => spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        _ = music.pause();
                        music.set_current_time(0.0);
                    }
                    Err(e) => log::warn!("audio unlock failed: {:?}", e),
                }
            }),
            Err(e) => log::warn!("audio unlock failed: {:?}", e),
        }
    }
    if let Some(video) = document
        .get_element_by_id(VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok())
    {
        video.load();
    }
}

/// Start button: unlock media, fade out, then drop out of layout.
pub fn wire_start_button(document: &web::Document) {
    let Some(button) = dom::html_element(document, START_BUTTON_ID) else {
        return;
    };
    let doc = document.clone();
    let btn = button.clone();
    dom::add_tap_listener(&button, move || {
        unlock_media(&doc);
        dom::set_style(&btn, "opacity", "0");
        let btn_later = btn.clone();
        dom::set_timeout(START_BUTTON_REMOVE_MS, move || {
            dom::set_style(&btn_later, "display", "none");
        });
    });
}
