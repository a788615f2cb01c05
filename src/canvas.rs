use birthday_core::{BlendMode, Color, Fill, SceneError, SceneResult, Surface};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `Surface` over a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

fn js_err(op: &str, e: JsValue) -> SceneError {
    SceneError::Surface(format!("{}: {:?}", op, e))
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> SceneResult<()> {
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .map_err(|e| js_err("arc", e))
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) -> SceneResult<()> {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
        Ok(())
    }

    fn set_blend(&mut self, mode: BlendMode) -> SceneResult<()> {
        self.ctx
            .set_global_composite_operation(mode.as_css())
            .map_err(|e| js_err("globalCompositeOperation", e))
    }

    fn fill_rect(&mut self, color: Color) -> SceneResult<()> {
        let size = self.size();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill) -> SceneResult<()> {
        match fill {
            Fill::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Fill::Radial(g) => {
                let gradient = self
                    .ctx
                    .create_radial_gradient(
                        g.center.x as f64,
                        g.center.y as f64,
                        0.0,
                        g.center.x as f64,
                        g.center.y as f64,
                        g.radius.max(0.0) as f64,
                    )
                    .map_err(|e| js_err("createRadialGradient", e))?;
                for (offset, color) in &g.stops {
                    gradient
                        .add_color_stop(*offset, &color.to_css())
                        .map_err(|e| js_err("addColorStop", e))?;
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        self.circle_path(center, radius)?;
        self.ctx.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color) -> SceneResult<()> {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
        Ok(())
    }
}
