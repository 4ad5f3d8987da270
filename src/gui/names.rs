use super::GuiError;

/// Stack of label scopes, one per open window or tree region.
///
/// Labels only have to be unique within the innermost scope, so the same
/// name can reappear unchanged inside a nested region.
#[derive(Debug, Clone)]
pub struct NameScopes {
    scopes: Vec<Vec<String>>,
    padding: char,
}

impl Default for NameScopes {
    fn default() -> Self {
        Self::new(' ')
    }
}

impl NameScopes {
    pub fn new(padding: char) -> Self {
        Self { scopes: Vec::new(), padding }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Vec::new());
    }

    pub fn pop_scope(&mut self) -> Result<(), GuiError> {
        self.scopes.pop().map(|_| ()).ok_or(GuiError::NoOpenScope)
    }

    /// Pads `candidate` until it differs from every label already issued in
    /// the current scope, records it, and returns it.
    pub fn unique_name(&mut self, candidate: &str) -> Result<String, GuiError> {
        let padding = self.padding;
        let scope = self.scopes.last_mut().ok_or(GuiError::NoOpenScope)?;
        let mut name = candidate.to_string();
        while scope.iter().any(|used| used == &name) {
            name.push(padding);
        }
        scope.push(name.clone());
        Ok(name)
    }

    /// Drops every open scope, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let open = self.scopes.len();
        self.scopes.clear();
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identical_candidates_get_distinct_names() {
        let mut names = NameScopes::default();
        names.push_scope();
        let issued: Vec<_> = (0..5).map(|_| names.unique_name("Speed").unwrap()).collect();
        let distinct: HashSet<_> = issued.iter().collect();
        assert_eq!(distinct.len(), issued.len());
        assert_eq!(issued[0], "Speed");
        assert_eq!(issued[2], "Speed  ");
    }

    #[test]
    fn sibling_scopes_reuse_the_bare_name() {
        let mut names = NameScopes::default();
        names.push_scope();
        assert_eq!(names.unique_name("Color").unwrap(), "Color");
        names.pop_scope().unwrap();
        names.push_scope();
        assert_eq!(names.unique_name("Color").unwrap(), "Color");
    }

    #[test]
    fn nested_scope_does_not_see_outer_names() {
        let mut names = NameScopes::new('_');
        names.push_scope();
        names.unique_name("Offset").unwrap();
        names.push_scope();
        assert_eq!(names.unique_name("Offset").unwrap(), "Offset");
        assert_eq!(names.unique_name("Offset").unwrap(), "Offset_");
        names.pop_scope().unwrap();
        assert_eq!(names.unique_name("Offset").unwrap(), "Offset_");
    }

    #[test]
    fn usage_errors_leave_state_alone() {
        let mut names = NameScopes::default();
        assert_eq!(names.pop_scope(), Err(GuiError::NoOpenScope));
        assert_eq!(names.unique_name("x"), Err(GuiError::NoOpenScope));
        assert_eq!(names.depth(), 0);
    }
}
