//! Replays a scenario against live panels and collects what they emit.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use dragbox_common::{
    BoundingBox, ElementHandle, PanelError, PanelEvent, PanelId, PanelRect, ParentSize, Result,
};
use dragbox_config::DragboxConfig;
use dragbox_geometry::{AttachContext, GroupScope, Panel, PanelStyle, PropsUpdate};
use serde::Serialize;

use super::{Scenario, Step};

/// One event a panel emitted, tagged with the step that caused it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioEvent {
    pub step: usize,
    pub panel: PanelId,
    pub event: PanelEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSummary {
    pub id: PanelId,
    pub attached: bool,
    pub rect: PanelRect,
    pub style: PanelStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub events: Vec<ScenarioEvent>,
    pub panels: Vec<PanelSummary>,
}

pub struct ScenarioRunner {
    parent: ParentSize,
    panels: Vec<Panel>,
    log: Rc<RefCell<Vec<ScenarioEvent>>>,
    step: Rc<Cell<usize>>,
}

impl ScenarioRunner {
    /// Build and attach every panel of `scenario`.
    pub fn new(scenario: &Scenario, config: &DragboxConfig) -> Result<Self> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let step = Rc::new(Cell::new(0));
        let mut groups: HashMap<String, GroupScope> = HashMap::new();
        let mut panels = Vec::with_capacity(scenario.panels.len());

        for spec in &scenario.panels {
            if panels.iter().any(|p: &Panel| p.id() == spec.id) {
                return Err(PanelError::Other(format!("duplicate panel id {}", spec.id)));
            }

            let mut panel = Panel::from_config(spec.id, config);
            let sink = Rc::clone(&log);
            let current = Rc::clone(&step);
            let id = spec.id;
            panel.subscribe(move |event| {
                sink.borrow_mut().push(ScenarioEvent {
                    step: current.get(),
                    panel: id,
                    event: event.clone(),
                });
            });

            let group = spec
                .group
                .as_ref()
                .map(|name| groups.entry(name.clone()).or_default().clone());
            panel.on_attach(AttachContext {
                element: ElementHandle::new(),
                parent: Some(scenario.parent),
                group,
                props: spec.props.clone(),
            })?;
            panels.push(panel);
        }

        tracing::info!(
            panels = panels.len(),
            groups = groups.len(),
            "scenario panels attached"
        );

        Ok(Self {
            parent: scenario.parent,
            panels,
            log,
            step,
        })
    }

    fn panel_mut(&mut self, id: PanelId) -> Result<&mut Panel> {
        self.panels
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| PanelError::Other(format!("unknown panel {id}")))
    }

    /// Boxes of every attached panel, as a host would measure them.
    fn measure(&self) -> HashMap<ElementHandle, BoundingBox> {
        self.panels
            .iter()
            .filter_map(|p| Some((p.element()?, p.state().bounding_box())))
            .collect()
    }

    /// Apply one step. `index` is recorded on the events it produces.
    pub fn apply(&mut self, index: usize, step: &Step) -> Result<()> {
        self.step.set(index);
        tracing::debug!(index, ?step, "applying step");

        match step {
            Step::PointerDown { panel, pointer } => {
                self.panel_mut(*panel)?.pointer_down((*pointer).into())?;
            }
            Step::StickDown {
                panel,
                stick,
                pointer,
                force,
            } => {
                self.panel_mut(*panel)?
                    .stick_down(*stick, (*pointer).into(), *force)?;
            }
            Step::PointerMove { panel, pointer } => {
                let layout = self.measure();
                self.panel_mut(*panel)?
                    .pointer_move((*pointer).into(), &layout);
            }
            Step::PointerUp { panel } => {
                self.panel_mut(*panel)?.pointer_up();
            }
            Step::PointerCancel { panel } => {
                self.panel_mut(*panel)?.pointer_cancel();
            }
            Step::ParentResize { width, height } => {
                self.parent = ParentSize::new(*width, *height);
                let parent = self.parent;
                for panel in self.panels.iter_mut().filter(|p| p.is_attached()) {
                    panel.on_parent_resize(parent)?;
                }
            }
            Step::Props {
                panel,
                props,
                unit,
                parent_limitation,
            } => {
                self.panel_mut(*panel)?.on_props_changed(PropsUpdate {
                    props: props.clone(),
                    unit: *unit,
                    parent_limitation: *parent_limitation,
                })?;
            }
            Step::Detach { panel } => {
                self.panel_mut(*panel)?.on_detach();
            }
        }
        Ok(())
    }

    /// Run every step and report.
    pub fn run(mut self, scenario: &Scenario) -> Result<ScenarioReport> {
        for (index, step) in scenario.steps.iter().enumerate() {
            self.apply(index, step)?;
        }
        Ok(self.report())
    }

    pub fn report(&self) -> ScenarioReport {
        ScenarioReport {
            events: self.log.borrow().clone(),
            panels: self
                .panels
                .iter()
                .map(|p| PanelSummary {
                    id: p.id(),
                    attached: p.is_attached(),
                    rect: p.rect(),
                    style: p.style(),
                })
                .collect(),
        }
    }
}
