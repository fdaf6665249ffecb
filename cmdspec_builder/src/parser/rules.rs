use std::collections::BTreeSet;

use crate::api::Value;
use crate::model::{NameInfo, TargetType};
use crate::parser::{Error, SpecificationProperty};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Run every rule over the fully populated properties; all rules run so that every violation surfaces at once.
pub(crate) fn enforce_rules(properties: &[SpecificationProperty]) -> Vec<Error> {
    let mut errors = enforce_mutually_exclusive_sets(properties);
    errors.extend(enforce_required(properties));
    errors.extend(enforce_range(properties));

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Rules found {} violations.", errors.len());
    }

    errors
}

/// Every supplied option is in conflict when options of more than one set are supplied.
pub(crate) fn enforce_mutually_exclusive_sets(properties: &[SpecificationProperty]) -> Vec<Error> {
    let supplied: Vec<&SpecificationProperty> = properties
        .iter()
        .filter(|p| {
            p.specification().is_option()
                && !p.specification().set_name().is_empty()
                && p.is_parsed()
        })
        .collect();
    let set_names: BTreeSet<&str> = supplied
        .iter()
        .map(|p| p.specification().set_name())
        .collect();

    if set_names.len() <= 1 {
        return Vec::default();
    }

    supplied
        .into_iter()
        .map(|p| Error::MutuallyExclusiveSet {
            name: p.specification().name_info(),
            set_name: p.specification().set_name().to_string(),
        })
        .collect()
}

/// A required specification must be supplied, or have a declared default.
///
/// An option is excused when another option of its set was supplied.
pub(crate) fn enforce_required(properties: &[SpecificationProperty]) -> Vec<Error> {
    let supplied_sets: BTreeSet<&str> = properties
        .iter()
        .filter(|p| p.is_parsed() && p.specification().is_option())
        .map(|p| p.specification().set_name())
        .filter(|set_name| !set_name.is_empty())
        .collect();

    properties
        .iter()
        .filter(|p| {
            let specification = p.specification();
            specification.is_required()
                && !p.is_parsed()
                && specification.get_default().is_none()
        })
        .filter(|p| {
            let specification = p.specification();
            specification.is_value() || !supplied_sets.contains(specification.set_name())
        })
        .map(|p| {
            let specification = p.specification();
            let name = if specification.is_option() {
                specification.name_info()
            } else {
                NameInfo::empty()
            };
            Error::MissingRequiredOption(name)
        })
        .collect()
}

/// A supplied option sequence must hold between its min and max values.
pub(crate) fn enforce_range(properties: &[SpecificationProperty]) -> Vec<Error> {
    properties
        .iter()
        .filter(|p| {
            p.is_parsed()
                && p.specification().is_option()
                && p.specification().target() == TargetType::Sequence
        })
        .filter(|p| match p.value() {
            Some(Value::Sequence(values)) => {
                let specification = p.specification();
                let below = specification.get_min().map_or(false, |min| values.len() < min);
                let above = specification.get_max().map_or(false, |max| values.len() > max);
                below || above
            }
            _ => false,
        })
        .map(|p| Error::SequenceOutOfRange(p.specification().name_info()))
        .collect()
}
