//! # HTML Renderer
//!
//! A self-contained results page: canvas plot of every point, the closest
//! pair highlighted with its connecting segment, and stat cards for the
//! timings. No external assets, so the file opens anywhere.

use std::fmt::Write as _;

use crate::core::CanvasConfig;
use crate::ports::{Render, RenderResult, Scene};

/// Renders a scene as a standalone HTML visualization
#[derive(Clone, Copy, Debug)]
pub struct HtmlRender {
    canvas: CanvasConfig,
}

impl HtmlRender {
    /// Create a renderer drawing on the given canvas size
    pub fn new(canvas: CanvasConfig) -> Self {
        Self { canvas }
    }
}

impl Default for HtmlRender {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl Render for HtmlRender {
    fn render(&self, scene: &Scene) -> RenderResult<String> {
        let mut points_js = String::from("[");
        for (i, p) in scene.points.iter().enumerate() {
            if i > 0 {
                points_js.push(',');
            }
            let _ = write!(points_js, "[{},{}]", p.x, p.y);
        }
        points_js.push(']');

        let pair = scene.report.divide_and_conquer.pair;
        let pair_js = format!(
            "[[{},{}],[{},{}]]",
            pair[0].x, pair[0].y, pair[1].x, pair[1].y
        );

        let speedup = scene
            .report
            .speedup()
            .map(|s| format!("{:.2}x faster with divide &amp; conquer", s))
            .unwrap_or_else(|| "too fast to compare".to_string());

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Closest Pair Quest - Results</title>
<style>
body {{ font-family: sans-serif; background: #0f172a; color: #f8fafc; padding: 2rem; }}
h1 {{ color: #3b82f6; }}
canvas {{ display: block; background: #020617; border-radius: 8px; }}
.stats {{ display: flex; gap: 1rem; margin: 1rem 0; flex-wrap: wrap; }}
.card {{ background: #1e293b; padding: 1rem 1.5rem; border-radius: 8px; }}
.card h3 {{ margin: 0 0 0.3rem; color: #94a3b8; font-size: 0.8rem; text-transform: uppercase; }}
.card .value {{ font-size: 1.4rem; color: #3b82f6; }}
.winner {{ background: #059669; color: white; padding: 0.8rem; border-radius: 8px; display: inline-block; }}
</style>
</head>
<body>
<h1>Closest Pair Quest</h1>
<canvas id="canvas" width="{width}" height="{height}"></canvas>
<div class="stats">
<div class="card"><h3>Total Points</h3><div class="value">{count}</div></div>
<div class="card"><h3>Brute Force Time</h3><div class="value">{bf_ms:.4} ms</div></div>
<div class="card"><h3>Divide &amp; Conquer Time</h3><div class="value">{dnc_ms:.4} ms</div></div>
<div class="card"><h3>Closest Distance</h3><div class="value">{distance:.2}</div></div>
</div>
<div class="winner">{speedup}</div>
<script>
const ctx = document.getElementById('canvas').getContext('2d');
const points = {points_js};
const closestPair = {pair_js};
ctx.fillStyle = '#3b82f6';
points.forEach(p => {{
  ctx.beginPath();
  ctx.arc(p[0], p[1], 4, 0, Math.PI * 2);
  ctx.fill();
}});
ctx.strokeStyle = '#10b981';
ctx.lineWidth = 2;
ctx.beginPath();
ctx.moveTo(closestPair[0][0], closestPair[0][1]);
ctx.lineTo(closestPair[1][0], closestPair[1][1]);
ctx.stroke();
ctx.fillStyle = '#ef4444';
closestPair.forEach(p => {{
  ctx.beginPath();
  ctx.arc(p[0], p[1], 6, 0, Math.PI * 2);
  ctx.fill();
}});
</script>
</body>
</html>
"#,
            width = self.canvas.width,
            height = self.canvas.height,
            count = scene.points.len(),
            bf_ms = scene.report.brute_force.elapsed_ms,
            dnc_ms = scene.report.divide_and_conquer.elapsed_ms,
            distance = scene.report.divide_and_conquer.distance,
            speedup = speedup,
            points_js = points_js,
            pair_js = pair_js,
        ))
    }

    fn name(&self) -> &'static str {
        "html"
    }
}
