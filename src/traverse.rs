//! Depth-first, pre-order walk over a [`ParameterGroup`] tree.
//!
//! The GUI builder and the serializer both run through here; they differ only
//! in what they do at each group boundary and at each leaf.

use crate::group::{Node, ParameterGroup};
use crate::param::Param;

/// Read-only traversal callbacks.
pub trait Visitor {
    /// Returning `false` skips the whole subtree, including `leave_group`.
    fn enter_group(&mut self, group: &ParameterGroup) -> bool;
    fn leave_group(&mut self, group: &ParameterGroup);
    fn visit_param(&mut self, param: &Param);
}

/// Mutating traversal callbacks. `visit_param` reports whether the leaf changed.
pub trait VisitorMut {
    /// Returning `false` skips the whole subtree, including `leave_group`.
    fn enter_group(&mut self, group: &mut ParameterGroup) -> bool;
    fn leave_group(&mut self, group: &mut ParameterGroup);
    fn visit_param(&mut self, param: &mut Param) -> bool;
}

pub fn walk<V: Visitor + ?Sized>(group: &ParameterGroup, visitor: &mut V) {
    if !visitor.enter_group(group) {
        return;
    }
    for child in group.children() {
        match child {
            Node::Group(sub) => walk(sub, visitor),
            Node::Param(param) => visitor.visit_param(param),
        }
    }
    visitor.leave_group(group);
}

/// Returns true if any leaf in the visited part of the tree changed.
pub fn walk_mut<V: VisitorMut + ?Sized>(group: &mut ParameterGroup, visitor: &mut V) -> bool {
    if !visitor.enter_group(group) {
        return false;
    }
    let mut changed = false;
    for child in group.children_mut() {
        changed |= match child {
            Node::Group(sub) => walk_mut(sub, visitor),
            Node::Param(param) => visitor.visit_param(param),
        };
    }
    visitor.leave_group(group);
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::Parameter;

    #[derive(Default)]
    struct Trace {
        events: Vec<String>,
        collapse: Option<&'static str>,
        change: Option<&'static str>,
    }

    impl Visitor for Trace {
        fn enter_group(&mut self, group: &ParameterGroup) -> bool {
            self.events.push(format!("enter {}", group.name()));
            self.collapse != Some(group.name())
        }

        fn leave_group(&mut self, group: &ParameterGroup) {
            self.events.push(format!("leave {}", group.name()));
        }

        fn visit_param(&mut self, param: &Param) {
            self.events.push(param.name().to_string());
        }
    }

    impl VisitorMut for Trace {
        fn enter_group(&mut self, group: &mut ParameterGroup) -> bool {
            Visitor::enter_group(self, group)
        }

        fn leave_group(&mut self, group: &mut ParameterGroup) {
            Visitor::leave_group(self, group)
        }

        fn visit_param(&mut self, param: &mut Param) -> bool {
            Visitor::visit_param(self, param);
            self.change == Some(param.name())
        }
    }

    fn tree() -> ParameterGroup {
        ParameterGroup::new("root")
            .with(Parameter::new("a", 1_i32))
            .with_group(
                ParameterGroup::new("inner")
                    .with(Parameter::new("b", true))
                    .with_group(ParameterGroup::new("deep").with(Parameter::new("c", 0.5_f32))),
            )
            .with(Parameter::new("d", 2_i32))
    }

    #[test]
    fn visits_depth_first_in_insertion_order() {
        let mut trace = Trace::default();
        walk(&tree(), &mut trace);
        assert_eq!(
            trace.events,
            ["enter root", "a", "enter inner", "b", "enter deep", "c", "leave deep", "leave inner", "d", "leave root"]
        );
    }

    #[test]
    fn declined_group_skips_children_but_not_siblings() {
        let mut trace = Trace { collapse: Some("inner"), ..Trace::default() };
        walk(&tree(), &mut trace);
        assert_eq!(trace.events, ["enter root", "a", "enter inner", "d", "leave root"]);
    }

    #[test]
    fn change_flag_is_ored_across_subtree() {
        let mut group = tree();
        let mut trace = Trace { change: Some("c"), ..Trace::default() };
        assert!(walk_mut(&mut group, &mut trace));
        let mut quiet = Trace::default();
        assert!(!walk_mut(&mut group, &mut quiet));
    }
}
