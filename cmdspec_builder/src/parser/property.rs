use crate::api::{Specification, Value};
use crate::model::TargetType;

/// Where a property's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueOrigin {
    Parsed,
    Default,
    /// The empty sequence given to an unsupplied sequence without a default.
    ImplicitEmpty,
}

/// A specification joined with its value slot for one parse.
#[derive(Debug, Clone)]
pub(crate) struct SpecificationProperty<'s> {
    specification: &'s Specification,
    value: Option<(Value, ValueOrigin)>,
}

impl<'s> SpecificationProperty<'s> {
    pub(crate) fn new(specification: &'s Specification) -> Self {
        Self {
            specification,
            value: None,
        }
    }

    pub(crate) fn specification(&self) -> &'s Specification {
        self.specification
    }

    pub(crate) fn value(&self) -> Option<&Value> {
        self.value.as_ref().map(|(value, _)| value)
    }

    pub(crate) fn origin(&self) -> Option<ValueOrigin> {
        self.value.as_ref().map(|(_, origin)| *origin)
    }

    /// Whether the value was supplied on the command line.
    pub(crate) fn is_parsed(&self) -> bool {
        self.origin() == Some(ValueOrigin::Parsed)
    }

    pub(crate) fn set_parsed(&mut self, value: Value) {
        if self.value.replace((value, ValueOrigin::Parsed)).is_some() {
            unreachable!(
                "internal error - property '{}' must be populated only once",
                self.specification.property()
            );
        }
    }

    /// Fill an empty slot with the declared default, or an empty sequence for sequences.
    pub(crate) fn apply_default(&mut self) {
        if self.value.is_some() {
            return;
        }

        if let Some(default) = self.specification.get_default() {
            self.value.replace((default.clone(), ValueOrigin::Default));
        } else if self.specification.target() == TargetType::Sequence {
            self.value
                .replace((Value::Sequence(Vec::default()), ValueOrigin::ImplicitEmpty));
        }
    }

    pub(crate) fn into_value(self) -> Option<Value> {
        self.value.map(|(value, _)| value)
    }
}
