use super::definition::Action;

/// Descripción inmutable del lanzamiento: la lista ordenada de acciones que
/// el engine recorre. Se construye una vez y no cambia durante la ejecución.
pub struct LaunchDescription {
    pub actions: Vec<Box<dyn Action>>,
}

impl LaunchDescription {
    pub fn new(actions: Vec<Box<dyn Action>>) -> Self {
        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Builder de conveniencia; espejo del constructor para uso en tests y CLI.
pub fn build_launch_description(actions: Vec<Box<dyn Action>>) -> LaunchDescription {
    LaunchDescription::new(actions)
}
