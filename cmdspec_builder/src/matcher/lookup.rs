use crate::api::{ParserSettings, Specification};
use crate::constant::*;
use crate::model::{NameInfo, TargetType, TypeDescriptor};
use crate::tokens::NameLookup;

/// Name based queries over the option specifications of one parse.
#[derive(Debug)]
pub(crate) struct SpecificationLookup<'s> {
    options: Vec<&'s Specification>,
    case_sensitive: bool,
    builtins: Vec<&'static str>,
}

impl<'s> SpecificationLookup<'s> {
    pub(crate) fn new(specifications: &'s [Specification], settings: &ParserSettings) -> Self {
        let options: Vec<&Specification> =
            specifications.iter().filter(|s| s.is_option()).collect();
        let case_sensitive = settings.is_case_sensitive();
        let mut builtins = Vec::default();

        // Builtins are shadowed by any declared option of the same name.
        for (enabled, builtin) in [
            (settings.is_auto_help(), HELP_NAME),
            (settings.is_auto_version(), VERSION_NAME),
        ] {
            if enabled && !options.iter().any(|s| s.matches_name(builtin, case_sensitive)) {
                builtins.push(builtin);
            }
        }

        Self {
            options,
            case_sensitive,
            builtins,
        }
    }

    pub(crate) fn find(&self, name: &str) -> Option<&'s Specification> {
        self.options
            .iter()
            .find(|s| s.matches_name(name, self.case_sensitive))
            .copied()
    }

    /// The builtin (help or version) this name refers to, if any.
    pub(crate) fn builtin(&self, name: &str) -> Option<&'static str> {
        self.builtins
            .iter()
            .find(|builtin| {
                if self.case_sensitive {
                    **builtin == name
                } else {
                    builtin.eq_ignore_ascii_case(name)
                }
            })
            .copied()
    }

    pub(crate) fn name_lookup(&self, name: &str) -> NameLookup {
        match self.find(name) {
            Some(specification) => match specification.target() {
                TargetType::Switch => NameLookup::Switch,
                TargetType::Scalar | TargetType::Sequence => NameLookup::TakesValue,
            },
            None if self.builtin(name).is_some() => NameLookup::Switch,
            None => NameLookup::NotFound,
        }
    }

    pub(crate) fn separator(&self, name: &str) -> Option<char> {
        self.find(name).and_then(|s| s.get_separator())
    }

    pub(crate) fn type_descriptor(&self, name: &str) -> Option<TypeDescriptor> {
        match self.find(name) {
            Some(specification) => Some(specification.type_descriptor()),
            None if self.builtin(name).is_some() => {
                Some(TypeDescriptor::new(TargetType::Switch, None))
            }
            None => None,
        }
    }

    pub(crate) fn name_info(&self, name: &str) -> NameInfo {
        match self.find(name) {
            Some(specification) => specification.name_info(),
            None => NameInfo::new(None, name),
        }
    }
}
