//! Core LaunchEngine implementation

use uuid::Uuid;

use crate::action::{ActionRunResult, LaunchDescription};
use crate::context::LaunchContext;
use crate::errors::CoreLaunchError;
use crate::event::{EventStore, LaunchEventKind};
use crate::record::RunRepository;

/// Motor de recorrido cooperativo y de un solo hilo.
///
/// Responsable de visitar las acciones en orden de declaración, mantener el
/// trace de eventos y cortar la ejecución ante el primer fallo
/// (stop-on-failure). No introduce concurrencia ni puntos de suspensión:
/// cada `next_with` es una lectura-ejecución-escritura completa.
#[derive(Debug)]
pub struct LaunchEngine<E, R>
    where E: EventStore,
          R: RunRepository
{
    event_store: E,
    repository: R,
    default_run_id: Option<Uuid>,
}

impl<E, R> LaunchEngine<E, R>
    where E: EventStore,
          R: RunRepository
{
    /// Crea un nuevo engine con stores en memoria.
    #[inline]
    pub fn new() -> LaunchEngine<crate::event::InMemoryEventStore, crate::record::InMemoryRunRepository> {
        LaunchEngine::new_with_stores(crate::event::InMemoryEventStore::default(),
                                      crate::record::InMemoryRunRepository::new())
    }

    /// Crea un nuevo motor con los stores proporcionados.
    pub fn new_with_stores(event_store: E, repository: R) -> Self {
        Self { event_store,
               repository,
               default_run_id: None }
    }

    /// Define/genera un `run_id` por defecto si no existe aún y lo retorna.
    pub fn ensure_default_run_id(&mut self) -> Uuid {
        if self.default_run_id.is_none() {
            self.default_run_id = Some(Uuid::new_v4());
        }
        self.default_run_id.unwrap()
    }

    /// Fija explícitamente un `run_id` por defecto.
    pub fn set_default_run_id(&mut self, run_id: Uuid) {
        self.default_run_id = Some(run_id);
    }

    /// Obtiene el `run_id` por defecto si está configurado.
    pub fn default_run_id(&self) -> Option<Uuid> {
        self.default_run_id
    }

    /// Acceso de sólo lectura al event store.
    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Ensure a LaunchInitialized event exists and return the current events
    /// for the run (including the possibly newly appended LaunchInitialized).
    fn load_or_init(&mut self, run_id: Uuid, description: &LaunchDescription) -> Vec<crate::event::LaunchEvent> {
        let mut events = self.event_store.list(run_id);
        let has_init = events.iter().any(|e| matches!(e.kind, LaunchEventKind::LaunchInitialized { .. }));
        if !has_init {
            let ev = self.event_store
                         .append_kind(run_id, LaunchEventKind::LaunchInitialized { action_count: description.len() });
            events.push(ev);
        }
        self.default_run_id = Some(run_id);
        events
    }

    /// Ejecuta el run completo usando el `run_id` por defecto.
    pub fn run(&mut self, description: &LaunchDescription, context: &mut LaunchContext) -> Result<Uuid, CoreLaunchError> {
        let run_id = self.ensure_default_run_id();
        self.run_with(run_id, description, context)
    }

    /// Avanza una acción en el run por defecto.
    pub fn step(&mut self, description: &LaunchDescription, context: &mut LaunchContext) -> Result<(), CoreLaunchError> {
        let run_id = self.ensure_default_run_id();
        self.next_with(run_id, description, context)
    }

    /// Ejecuta un run específico hasta su finalización.
    pub fn run_with(&mut self,
                    run_id: Uuid,
                    description: &LaunchDescription,
                    context: &mut LaunchContext)
                    -> Result<Uuid, CoreLaunchError> {
        loop {
            match self.next_with(run_id, description, context) {
                Ok(()) => continue,
                Err(CoreLaunchError::LaunchCompleted) => return Ok(run_id),
                Err(e) => return Err(e),
            }
        }
    }

    /// Ejecuta la siguiente acción pendiente del run.
    pub fn next_with(&mut self,
                     run_id: Uuid,
                     description: &LaunchDescription,
                     context: &mut LaunchContext)
                     -> Result<(), CoreLaunchError> {
        let events = self.load_or_init(run_id, description);
        let record = self.repository.load(run_id, &events, description);

        if record.completed {
            return Err(CoreLaunchError::LaunchCompleted);
        }

        let cursor = record.cursor;
        if cursor >= description.len() {
            return Err(CoreLaunchError::LaunchCompleted);
        }

        let action = description.actions
                                .get(cursor)
                                .ok_or(CoreLaunchError::InvalidActionIndex)?;

        let _started = self.event_store.append_kind(run_id,
                                                    LaunchEventKind::ActionStarted { action_index: cursor,
                                                                                     action: action.describe() });

        match action.execute(context) {
            ActionRunResult::Success => self.handle_action_success(run_id, cursor, action.describe(), vec![], description, context),
            ActionRunResult::SuccessWithSignals { signals } => {
                self.handle_action_success(run_id, cursor, action.describe(), signals, description, context)
            }
            ActionRunResult::Failure { error } => self.handle_action_failure(run_id, cursor, action.describe(), error),
        }
    }

    fn handle_action_success(&mut self,
                             run_id: Uuid,
                             cursor: usize,
                             action: String,
                             signals: Vec<crate::action::ActionSignal>,
                             description: &LaunchDescription,
                             context: &LaunchContext)
                             -> Result<(), CoreLaunchError> {
        for s in signals {
            let _ = self.event_store.append_kind(run_id,
                                                 LaunchEventKind::ActionSignal { action_index: cursor,
                                                                                 action: action.clone(),
                                                                                 signal: s.signal,
                                                                                 data: s.data });
        }

        let _finished = self.event_store.append_kind(run_id,
                                                     LaunchEventKind::ActionFinished { action_index: cursor,
                                                                                       action });

        if cursor + 1 == description.len() {
            self.complete_run(run_id, context);
        }

        Ok(())
    }

    fn handle_action_failure(&mut self,
                             run_id: Uuid,
                             cursor: usize,
                             action: String,
                             error: CoreLaunchError)
                             -> Result<(), CoreLaunchError> {
        let _ = self.event_store.append_kind(run_id,
                                             LaunchEventKind::ActionFailed { action_index: cursor,
                                                                             action,
                                                                             error: error.clone() });
        Err(error)
    }

    fn complete_run(&mut self, run_id: Uuid, context: &LaunchContext) {
        let _ = self.event_store
                    .append_kind(run_id,
                                 LaunchEventKind::LaunchCompleted { global_params: context.global_params().to_vec() });
    }

    /// Lista eventos del run por defecto.
    pub fn events(&self) -> Option<Vec<crate::event::LaunchEvent>> {
        self.default_run_id.map(|rid| self.event_store.list(rid))
    }

    /// Lista eventos de un run arbitrario.
    pub fn events_for(&self, run_id: Uuid) -> Vec<crate::event::LaunchEvent> {
        self.event_store.list(run_id)
    }

    /// Variante compacta de eventos para el run por defecto.
    pub fn event_variants(&self) -> Option<Vec<&'static str>> {
        self.events().map(|events| {
                         events.iter()
                               .map(|e| match e.kind {
                                   LaunchEventKind::LaunchInitialized { .. } => "I",
                                   LaunchEventKind::ActionStarted { .. } => "S",
                                   LaunchEventKind::ActionFinished { .. } => "F",
                                   LaunchEventKind::ActionSignal { .. } => "G",
                                   LaunchEventKind::ActionFailed { .. } => "X",
                                   LaunchEventKind::LaunchCompleted { .. } => "C",
                               })
                               .collect()
                     })
    }

    /// Lista final acumulada del run por defecto si ya completó.
    pub fn final_global_params(&self) -> Option<Vec<String>> {
        let evs = self.events()?;
        evs.iter().rev().find_map(|e| match &e.kind {
                            LaunchEventKind::LaunchCompleted { global_params } => Some(global_params.clone()),
                            _ => None,
                        })
    }
}

impl Default for LaunchEngine<crate::event::InMemoryEventStore, crate::record::InMemoryRunRepository> {
    fn default() -> Self {
        Self::new_with_stores(crate::event::InMemoryEventStore::default(),
                              crate::record::InMemoryRunRepository::new())
    }
}
