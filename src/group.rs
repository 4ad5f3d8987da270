use crate::param::{Param, ParamValue, Parameter};

/// Child of a [`ParameterGroup`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Param(Param),
    Group(ParameterGroup),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Param(param) => param.name(),
            Node::Group(group) => group.name(),
        }
    }
}

impl From<Param> for Node {
    fn from(param: Param) -> Self {
        Node::Param(param)
    }
}

impl From<ParameterGroup> for Node {
    fn from(group: ParameterGroup) -> Self {
        Node::Group(group)
    }
}

/// Ordered, named collection of parameters and nested groups.
///
/// The root group of a preset is conventionally unnamed; an empty name makes
/// the serializer write the children straight into the enclosing object.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGroup {
    name: String,
    serializable: bool,
    children: Vec<Node>,
}

impl ParameterGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), serializable: true, children: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_serializable(&self) -> bool {
        self.serializable
    }

    pub fn set_serializable(&mut self, serializable: bool) {
        self.serializable = serializable;
    }

    pub fn serializable(mut self, serializable: bool) -> Self {
        self.serializable = serializable;
        self
    }

    /// Builder-style append of a typed parameter.
    pub fn with<T: ParamValue>(mut self, parameter: Parameter<T>) -> Self {
        self.add(parameter);
        self
    }

    /// Builder-style append of a nested group.
    pub fn with_group(mut self, group: ParameterGroup) -> Self {
        self.add_group(group);
        self
    }

    pub fn add<T: ParamValue>(&mut self, parameter: Parameter<T>) -> &mut Self {
        self.children.push(Node::Param(T::into_param(parameter)));
        self
    }

    pub fn add_group(&mut self, group: ParameterGroup) -> &mut Self {
        self.children.push(Node::Group(group));
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// First direct child parameter called `name`.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.children.iter().find_map(|node| match node {
            Node::Param(param) if param.name() == name => Some(param),
            _ => None,
        })
    }

    pub fn param_mut(&mut self, name: &str) -> Option<&mut Param> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Param(param) if param.name() == name => Some(param),
            _ => None,
        })
    }

    /// First direct child parameter called `name` holding a `T`.
    pub fn get<T: ParamValue>(&self, name: &str) -> Option<&Parameter<T>> {
        self.children.iter().find_map(|node| match node {
            Node::Param(param) if param.name() == name => T::from_param(param),
            _ => None,
        })
    }

    pub fn get_mut<T: ParamValue>(&mut self, name: &str) -> Option<&mut Parameter<T>> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Param(param) if param.name() == name => T::from_param_mut(param),
            _ => None,
        })
    }

    pub fn group(&self, name: &str) -> Option<&ParameterGroup> {
        self.children.iter().find_map(|node| match node {
            Node::Group(group) if group.name() == name => Some(group),
            _ => None,
        })
    }

    pub fn group_mut(&mut self, name: &str) -> Option<&mut ParameterGroup> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Group(group) if group.name() == name => Some(group),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn children_keep_insertion_order() {
        let group = ParameterGroup::new("render")
            .with(Parameter::new("enabled", true))
            .with_group(ParameterGroup::new("light"))
            .with(Parameter::new("exposure", 1.0_f32));
        let names: Vec<_> = group.children().iter().map(Node::name).collect();
        assert_eq!(names, ["enabled", "light", "exposure"]);
    }

    #[test]
    fn typed_lookup_matches_name_and_type() {
        let mut group = ParameterGroup::new("")
            .with(Parameter::new("position", Vec3::ZERO))
            .with(Parameter::new("count", 2_i32));
        assert!(group.get::<f32>("count").is_none());
        group.get_mut::<Vec3>("position").expect("vec3 param").set(Vec3::X);
        assert_eq!(group.get::<Vec3>("position").map(Parameter::get), Some(Vec3::X));
        assert!(group.param("missing").is_none());
    }
}
