//! Self-contained HTML page: named containers, inline SVG, and a small
//! script that shows the precomputed tooltip for the hovered cell.

use crate::chart::model::ChartModel;
use crate::config::ChartConfig;
use crate::domain::Dataset;
use crate::export::svg::{chart_svg, escape, palette_svg};

pub const PAGE_TITLE: &str = "Monthly Global Land-Surface Temperature";

pub fn render_page(dataset: &Dataset, config: &ChartConfig) -> String {
    let model = ChartModel::new(dataset, config);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div id="container" style="width: {container_width}px; height: {container_height}px">
        <h1 id="title">{title}</h1>
        <h3 id="description">{description}</h3>
        {chart}
        <div id="legend" style="width: {legend_width}px; height: {legend_height}px">
            <div class="legend-label">{legend_label}</div>
            {palette}
        </div>
    </div>
    <div id="tooltip" style="opacity: 0"></div>
    <script>{js}</script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        css = inline_css(config),
        container_width = config.container_width,
        container_height = config.container_height,
        description = escape(&dataset.description()),
        chart = chart_svg(dataset, &model, config),
        legend_width = config.legend_width,
        legend_height = config.legend_height(),
        legend_label = escape(&config.legend_label),
        palette = palette_svg(&model, config),
        js = inline_javascript(config),
    )
}

fn inline_css(config: &ChartConfig) -> String {
    format!(
        r"
body {{ font-family: sans-serif; background: #f4f4f4; }}
#container {{ margin: 0 auto; padding: 10px; background: #fff; box-shadow: 0 0 8px #aaa; }}
#title, #description {{ text-align: center; margin: 8px 0; }}
.Label {{ font-size: 14px; text-anchor: middle; }}
.cell:hover {{ stroke: #000; stroke-width: 1px; }}
#legend {{ margin: 10px auto; }}
.legend-label {{ font-size: 12px; text-align: center; }}
#tooltip {{
    position: absolute;
    min-height: {tip_height}px;
    padding: 6px 10px;
    font-size: 12px;
    text-align: center;
    color: #fff;
    background: #222;
    border-radius: 4px;
    pointer-events: none;
    transition: opacity 0.1s;
}}
",
        tip_height = config.tip_height,
    )
}

fn inline_javascript(config: &ChartConfig) -> String {
    format!(
        r"
const tip = document.getElementById('tooltip');
document.querySelectorAll('#chart .cell').forEach((cell) => {{
    cell.addEventListener('mouseover', (event) => {{
        tip.setAttribute('data-year', cell.dataset.year);
        tip.innerHTML = cell.dataset.tooltip;
        tip.style.opacity = {opacity};
        tip.style.left = event.pageX + 'px';
        tip.style.top = (event.pageY - {offset}) + 'px';
    }});
    cell.addEventListener('mouseout', () => {{
        tip.style.opacity = 0;
    }});
}});
",
        opacity = config.tooltip_opacity,
        offset = config.tooltip_offset,
    )
}
