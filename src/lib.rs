#![cfg(target_arch = "wasm32")]
use birthday_core::{
    Continuation, SceneConfig, SceneError, SceneResult, Scheduler, Stage, Starfield, Surface,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod audio;
mod canvas;
mod constants;
mod dom;
mod frame;
mod ui;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("birthday-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let bg_canvas = dom::canvas_by_id(&document, BG_CANVAS_ID)?;
    let fx_canvas = dom::canvas_by_id(&document, FX_CANVAS_ID)?;
    dom::sync_canvas_to_window(&bg_canvas);
    dom::sync_canvas_to_window(&fx_canvas);

    let mut scheduler = frame::RafScheduler::new();
    let config = SceneConfig::default();
    let fft_size = config.fft_size;
    let star_count = config.star_count;
    let stage = Rc::new(RefCell::new(Stage::new(config, scheduler.now_ms())));
    let hooks = Rc::new(RefCell::new(ui::DomHooks::new(document.clone())));

    // Background starfield: its own surface, rng and loop.
    let bg = Rc::new(RefCell::new(canvas::CanvasSurface::new(bg_canvas.clone())?));
    let star_rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    let stars = {
        let size = bg.borrow().size();
        Rc::new(RefCell::new(Starfield::new(star_count, size, &mut *star_rng.borrow_mut())))
    };
    {
        let (bg, stars, star_rng) = (bg.clone(), stars.clone(), star_rng.clone());
        scheduler.schedule(
            STARS_LOOP,
            Box::new(move |_now: f64| -> SceneResult<Continuation> {
                stars
                    .borrow_mut()
                    .frame(&mut *bg.borrow_mut(), &mut *star_rng.borrow_mut())?;
                Ok(Continuation::Continue)
            }),
        );
    }

    {
        let (bg_canvas, fx_canvas) = (bg_canvas.clone(), fx_canvas.clone());
        let (bg, stars, star_rng) = (bg.clone(), stars.clone(), star_rng.clone());
        dom::on_window_resize(move || {
            dom::sync_canvas_to_window(&bg_canvas);
            dom::sync_canvas_to_window(&fx_canvas);
            let size = bg.borrow().size();
            stars.borrow_mut().scatter(size, &mut *star_rng.borrow_mut());
        });
    }

    // Effects: flame, smoke, fireworks, sparks plus the timed scene transitions.
    let mut fx = canvas::CanvasSurface::new(fx_canvas)?;
    {
        let (stage, hooks, document) = (stage.clone(), hooks.clone(), document.clone());
        scheduler.schedule(
            EFFECTS_LOOP,
            Box::new(move |now_ms: f64| -> SceneResult<Continuation> {
                let anchor = dom::anchor_or_fallback(&document);
                let (stats, events) = stage.borrow_mut().effects_frame(
                    &mut fx,
                    anchor,
                    now_ms,
                    &mut *hooks.borrow_mut(),
                );
                for ev in events {
                    log::info!("[effects] {:?}", ev);
                }
                stats?;
                Ok(Continuation::Continue)
            }),
        );
    }

    // Tap fallback works with or without a microphone.
    if let Ok(Some(candle)) = document.query_selector(CANDLE_SELECTOR) {
        let (stage, hooks, document, clock) =
            (stage.clone(), hooks.clone(), document.clone(), scheduler.clone());
        dom::add_tap_listener(&candle, move || {
            let anchor = dom::anchor_or_fallback(&document);
            stage
                .borrow_mut()
                .extinguish(anchor, clock.now_ms(), &mut *hooks.borrow_mut());
        });
    }
    ui::wire_start_button(&document);

    // Microphone is requested immediately; rendering never waits for it.
    match audio::Microphone::request(fft_size).await {
        Ok(mut mic) => {
            stage.borrow_mut().on_listening();
            let (stage, hooks, document) = (stage.clone(), hooks.clone(), document.clone());
            scheduler.schedule(
                BREATH_LOOP,
                Box::new(move |now_ms: f64| -> SceneResult<Continuation> {
                    let anchor = dom::anchor_or_fallback(&document);
                    let (next, events) = stage.borrow_mut().breath_frame(
                        mic.sample(),
                        anchor,
                        now_ms,
                        &mut *hooks.borrow_mut(),
                    );
                    for ev in events {
                        log::info!("[breath] {:?}", ev);
                    }
                    Ok(next)
                }),
            );
        }
        Err(e) => {
            let reason = match e {
                SceneError::MicPermissionDenied(reason) => reason,
                other => other.to_string(),
            };
            _ = stage
                .borrow_mut()
                .on_permission_denied(reason, &mut *hooks.borrow_mut());
        }
    }

    Ok(())
}
