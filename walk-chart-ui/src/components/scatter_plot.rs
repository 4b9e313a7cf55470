//! Flow-by-time scatter plot with hover tooltips.
//!
//! Marks are drawn as plain SVG from the layout in `walk_data::plot`; the
//! tooltip follows `walk_data::hover::HoverState`, with the delayed hide
//! run through a [`DeferredAction`] owned by this component.

use crate::timer::{use_deferred_action, DeferredAction};
use dioxus::prelude::*;
use walk_data::hover::HoverState;
use walk_data::plot::{PlotConfig, PlotLayout, ScatterMark, FLOW_AXIS_LABEL};
use walk_survey::observation::Observation;

const GRID_STROKE: &str = "#e0e0e0";
const AXIS_STROKE: &str = "#222";
const TICK_LENGTH: f64 = 8.0;
const TOOLTIP_STYLE: &str = "position: absolute; pointer-events: none; min-width: 60px; padding: 0.3rem 0.5rem; border-radius: 3px; \
background-color: rgba(180,180,180,0.75); color: rgba(30,30,30,1); font-size: 0.8rem; line-height: 1em; \
box-shadow: 0 1px 2px rgba(33,33,33,0.2);";

#[derive(Props, Clone, PartialEq)]
pub struct ScatterPlotProps {
    /// Observations of one site
    pub observations: Vec<Observation>,
    #[props(default)]
    pub config: PlotConfig,
}

#[component]
pub fn ScatterPlot(props: ScatterPlotProps) -> Element {
    let hover = use_signal(HoverState::default);
    let hide_timer = use_deferred_action();

    let config = props.config;
    let layout = PlotLayout::new(config);
    let marks = layout.marks(&props.observations);
    let x_ticks = layout.x_axis_ticks();
    let y_ticks = layout.y_axis_ticks();
    let inner_width = config.inner_width();
    let inner_height = config.inner_height();
    log::debug!("scatter_plot: {} marks", marks.len());

    let tooltip = hover
        .read()
        .target()
        .map(|target| (target.anchor, target.tooltip_content()));

    rsx! {
        div {
            style: "position: relative; width: {config.width}px;",
            svg {
                width: "{config.width}",
                height: "{config.height}",
                class: "scatter-plot-chart",
                g {
                    transform: "translate({config.margin.left}, {config.margin.top})",

                    // Grid
                    for tick in y_ticks.iter() {
                        line {
                            x1: "0",
                            x2: "{inner_width}",
                            y1: "{tick.position}",
                            y2: "{tick.position}",
                            stroke: GRID_STROKE,
                        }
                    }
                    for tick in x_ticks.iter() {
                        line {
                            x1: "{tick.position}",
                            x2: "{tick.position}",
                            y1: "0",
                            y2: "{inner_height}",
                            stroke: GRID_STROKE,
                        }
                    }

                    // Bottom (time) axis
                    g {
                        transform: "translate(0, {inner_height})",
                        line { x1: "0", x2: "{inner_width}", y1: "0", y2: "0", stroke: AXIS_STROKE }
                        for tick in x_ticks.iter() {
                            g {
                                transform: "translate({tick.position}, 0)",
                                line { y1: "0", y2: "{TICK_LENGTH}", stroke: AXIS_STROKE }
                                text {
                                    y: "20",
                                    "text-anchor": "middle",
                                    "font-size": "10",
                                    "{tick.label}"
                                }
                            }
                        }
                    }

                    // Left (flow) axis
                    g {
                        line { x1: "0", x2: "0", y1: "0", y2: "{inner_height}", stroke: AXIS_STROKE }
                        for tick in y_ticks.iter() {
                            g {
                                transform: "translate(0, {tick.position})",
                                line { x1: "0", x2: "{TICK_LENGTH}", stroke: AXIS_STROKE }
                                text {
                                    x: "22",
                                    dy: "0.32em",
                                    "font-size": "10",
                                    "{tick.label}"
                                }
                            }
                        }
                    }
                    text {
                        x: "-70",
                        y: "15",
                        transform: "rotate(-90)",
                        "font-size": "10",
                        "{FLOW_AXIS_LABEL}"
                    }

                    for mark in marks.iter() {
                        PlotMark {
                            key: "circle-{mark.index}",
                            observation: props.observations[mark.index].clone(),
                            mark: mark.clone(),
                            hover,
                            hide_timer,
                            tooltip_offset: config.tooltip_offset,
                            hide_delay_ms: config.hide_delay_ms,
                        }
                    }
                }
            }

            if let Some((anchor, content)) = tooltip {
                div {
                    style: "{TOOLTIP_STYLE} top: {anchor.top}px; left: {anchor.left}px;",
                    div { class: "tooltip-paragraph", "{content.flow}" }
                    div {
                        class: "tooltip-paragraph",
                        "{content.time}"
                        br {}
                        "{content.day_and_date}"
                        br {}
                        "{content.temperature}"
                    }
                }
            }
        }
    }
}

/// One observation's circle. Entering shows its tooltip at once; leaving
/// hides it after the configured delay unless another mark is entered
/// first.
#[component]
fn PlotMark(
    mark: ScatterMark,
    observation: Observation,
    hover: Signal<HoverState>,
    hide_timer: DeferredAction,
    tooltip_offset: f64,
    hide_delay_ms: u32,
) -> Element {
    let mut hover = hover;
    let anchor = mark.tooltip_anchor(tooltip_offset);

    let on_enter = move |_: MouseEvent| {
        hide_timer.cancel();
        hover.write().enter(observation.clone(), anchor);
    };

    let on_leave = move |_: MouseEvent| {
        let ticket = hover.write().leave();
        hide_timer.schedule(hide_delay_ms, move || {
            if hover.write().expire(ticket) {
                log::debug!("scatter_plot: tooltip hidden");
            }
        });
    };

    rsx! {
        circle {
            cx: "{mark.x}",
            cy: "{mark.y}",
            r: "{mark.radius}",
            fill: "{mark.fill}",
            onmouseenter: on_enter,
            onmouseleave: on_leave,
        }
    }
}
