use crate::api::{change_type, ConversionSettings};
use crate::matcher::SpecificationLookup;
use crate::model::{NameInfo, TargetType};
use crate::parser::{Error, SpecificationProperty};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Convert the option groups into the option properties.
///
/// Every group whose name resolves to the property's specification contributes: scalars and switches keep the last value, sequences concatenate.
pub(crate) fn map_options(
    properties: &mut [SpecificationProperty],
    options: &[(String, Vec<String>)],
    lookup: &SpecificationLookup,
    settings: &ConversionSettings,
) -> Vec<Error> {
    let mut errors = Vec::default();

    for property in properties
        .iter_mut()
        .filter(|p| p.specification().is_option())
    {
        let specification = property.specification();
        let raw: Vec<String> = options
            .iter()
            .filter(|(name, _)| {
                lookup
                    .find(name)
                    .map(|s| s.property() == specification.property())
                    .unwrap_or(false)
            })
            .flat_map(|(_, values)| values.iter().cloned())
            .collect();

        if raw.is_empty() {
            continue;
        }

        match change_type(&raw, specification.conversion(), settings) {
            Ok(value) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Mapped option '{}' to {value:?}.", specification.property());
                }

                property.set_parsed(value);
            }
            Err(_error) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option '{}': {_error}", specification.property());
                }

                errors.push(Error::BadFormatConversion(specification.name_info()));
            }
        }
    }

    errors
}

/// Distribute the positional values over the value properties, in index order.
///
/// Each specification greedily takes as many leading values as its max allows; the remainder flows to the next.
pub(crate) fn map_values(
    properties: &mut [SpecificationProperty],
    values: &[String],
    settings: &ConversionSettings,
) -> Vec<Error> {
    let mut errors = Vec::default();
    let mut positional: Vec<&mut SpecificationProperty> = properties
        .iter_mut()
        .filter(|p| p.specification().is_value())
        .collect();
    positional.sort_by_key(|p| p.specification().index());
    let mut remaining = values;

    for property in positional.iter_mut() {
        let specification = property.specification();
        let take = match specification.max_value_count() {
            Some(max) => max.min(remaining.len()),
            None => remaining.len(),
        };
        let (taken, rest) = remaining.split_at(take);
        remaining = rest;

        if let Some(min) = specification.get_min() {
            if taken.len() < min {
                errors.push(Error::SequenceOutOfRange(NameInfo::empty()));
            }
        }

        if taken.is_empty() {
            continue;
        }

        match change_type(taken, specification.conversion(), settings) {
            Ok(value) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Mapped value '{}' to {value:?}.", specification.property());
                }

                property.set_parsed(value);
            }
            Err(_error) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Value '{}': {_error}", specification.property());
                }

                errors.push(Error::BadFormatConversion(NameInfo::empty()));
            }
        }
    }

    // Leftovers are only an error against a closed sequence; otherwise they are ignored.
    if let Some(last) = positional.last() {
        let specification = last.specification();

        if !remaining.is_empty()
            && specification.target() == TargetType::Sequence
            && specification.get_max().is_some()
        {
            errors.push(Error::SequenceOutOfRange(NameInfo::empty()));
        }
    }

    errors
}
