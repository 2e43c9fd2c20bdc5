//! Estado reconstruido de un run (`LaunchRecord`) a partir de su trace.
//!
//! El repositorio aplica un replay lineal: consume eventos en orden y
//! actualiza un `LaunchRecord` por evento. No almacena el contexto (sólo
//! estados por acción) para mantener neutralidad.
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::action::LaunchDescription;
use crate::event::{LaunchEvent, LaunchEventKind};

/// Estado de una acción en tiempo de ejecución.
///
/// Las transiciones válidas son:
/// - `Pending` -> `Running`
/// - `Running` -> `FinishedOk`
/// - `Running` -> `Failed`
///
/// No se permiten reversiones o saltos arbitrarios entre estados.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Pending,
    Running,
    FinishedOk,
    Failed,
}

/// Estado de una acción dentro del record.
pub struct ActionSlot {
    pub action: String,
    pub status: ActionStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

pub struct LaunchRecord {
    pub id: Uuid,
    pub actions: Vec<ActionSlot>,
    pub cursor: usize,
    pub completed: bool,
}

/// Trait para reconstruir (`replay`) el estado de un run a partir de eventos.
pub trait RunRepository {
    fn load(&self, run_id: Uuid, events: &[LaunchEvent], description: &LaunchDescription) -> LaunchRecord;
}

pub struct InMemoryRunRepository;
impl InMemoryRunRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InMemoryRunRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RunRepository for InMemoryRunRepository {
    fn load(&self, run_id: Uuid, events: &[LaunchEvent], description: &LaunchDescription) -> LaunchRecord {
        let mut actions: Vec<ActionSlot> = description.actions
                                                      .iter()
                                                      .map(|a| ActionSlot { action: a.describe(),
                                                                            status: ActionStatus::Pending,
                                                                            started_at: None,
                                                                            finished_at: None })
                                                      .collect();
        let mut completed = false;
        for ev in events {
            match &ev.kind {
                LaunchEventKind::LaunchInitialized { .. } => {}
                LaunchEventKind::ActionStarted { action_index, .. } => {
                    if let Some(slot) = actions.get_mut(*action_index) {
                        slot.status = ActionStatus::Running;
                        slot.started_at = Some(ev.ts);
                    }
                }
                LaunchEventKind::ActionFinished { action_index, .. } => {
                    if let Some(slot) = actions.get_mut(*action_index) {
                        slot.status = ActionStatus::FinishedOk;
                        slot.finished_at = Some(ev.ts);
                    }
                }
                LaunchEventKind::ActionFailed { action_index, .. } => {
                    if let Some(slot) = actions.get_mut(*action_index) {
                        slot.status = ActionStatus::Failed;
                        slot.finished_at = Some(ev.ts);
                    }
                }
                LaunchEventKind::LaunchCompleted { .. } => completed = true,
                LaunchEventKind::ActionSignal { .. } => {}
            }
        }
        let cursor = actions.iter()
                            .position(|s| matches!(s.status, ActionStatus::Pending))
                            .unwrap_or(actions.len());
        LaunchRecord { id: run_id,
                       actions,
                       cursor,
                       completed }
    }
}
