use birthday_core::{SceneError, SceneResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Live microphone feeding an analyser; sampled once per frame.
pub struct Microphone {
    // Kept alive for the lifetime of the graph.
    _audio_ctx: web::AudioContext,
    _source: web::MediaStreamAudioSourceNode,
    analyser: web::AnalyserNode,
    bins: Vec<u8>,
}

fn audio_err(op: &str, e: JsValue) -> SceneError {
    SceneError::Audio(format!("{}: {:?}", op, e))
}

impl Microphone {
    /// Asks for microphone access and wires `source -> analyser`. A refused
    /// or unavailable device maps to `MicPermissionDenied`.
    pub async fn request(fft_size: u32) -> SceneResult<Self> {
        let window = web::window().ok_or_else(|| SceneError::Dom("no window".into()))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|e| SceneError::MicPermissionDenied(format!("{:?}", e)))?;
        let constraints = web::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| SceneError::MicPermissionDenied(format!("{:?}", e)))?;
        let stream: web::MediaStream = JsFuture::from(promise)
            .await
            .map_err(|e| SceneError::MicPermissionDenied(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|e| audio_err("MediaStream cast", e))?;

        let audio_ctx = web::AudioContext::new().map_err(|e| audio_err("AudioContext", e))?;
        // Contexts created outside a gesture start suspended on some browsers.
        if let Ok(p) = audio_ctx.resume() {
            if let Err(e) = JsFuture::from(p).await {
                log::warn!("AudioContext resume failed: {:?}", e);
            }
        }
        let source = audio_ctx
            .create_media_stream_source(&stream)
            .map_err(|e| audio_err("createMediaStreamSource", e))?;
        let analyser = web::AnalyserNode::new(&audio_ctx).map_err(|e| audio_err("AnalyserNode", e))?;
        analyser.set_fft_size(fft_size);
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| audio_err("connect", e))?;
        let bins = vec![0u8; analyser.frequency_bin_count() as usize];
        log::info!("microphone ready: {} bins", bins.len());
        Ok(Self {
            _audio_ctx: audio_ctx,
            _source: source,
            analyser,
            bins,
        })
    }

    /// Current byte frequency magnitudes.
    pub fn sample(&mut self) -> &[u8] {
        self.analyser.get_byte_frequency_data(&mut self.bins);
        &self.bins
    }
}
