use crate::constant::SWITCH_VALUE;
use crate::model::{TargetType, TypeDescriptor};
use crate::tokens::Token;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The raw string groups of one parse, as aligned to option names and positional values.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct TokenPartitions {
    /// Ordered multimap of option name to its raw values.
    pub(crate) options: Vec<(String, Vec<String>)>,
    /// Bare (positional) values, in original order.
    pub(crate) values: Vec<String>,
    /// Tokens that no rule could place.
    pub(crate) errors: Vec<Token>,
}

/// Classify tokens into switches, scalars, sequences, and bare values.
///
/// Each rule runs over the tokens left unclaimed by the previous rules, in the order: switches, scalars, sequences.
/// A sequence run therefore stops only at a name still unclaimed, so `-l x -s v y` gives `l` both `x` and `y`.
/// A name is claimed by the first rule matching its descriptor and never re-examined.
pub(crate) fn partition<F>(tokens: Vec<Token>, type_lookup: F) -> TokenPartitions
where
    F: Fn(&str) -> Option<TypeDescriptor>,
{
    let mut slots: Vec<Option<Token>> = tokens.into_iter().map(Some).collect();
    let mut options: Vec<(usize, String, Vec<String>)> = Vec::default();
    let target_of = |token: &Token| -> Option<TargetType> {
        match token {
            Token::Name(name) => type_lookup(name).map(|d| d.target()),
            _ => None,
        }
    };

    // 1. Switches.
    let remaining = unclaimed(&slots);
    let mut skip = false;
    for (k, &i) in remaining.iter().enumerate() {
        if skip {
            skip = false;
            continue;
        }

        if let Some(TargetType::Switch) = slots[i].as_ref().and_then(&target_of) {
            let name = take_text(&mut slots, i);
            // An explicit assignment (`--flag=false`) belongs to the switch.
            let value = match remaining.get(k + 1) {
                Some(&j) if is_assigned(&slots[j]) => {
                    skip = true;
                    take_text(&mut slots, j)
                }
                _ => SWITCH_VALUE.to_string(),
            };
            options.push((i, name, vec![value]));
        }
    }

    // 2. Scalars.
    let remaining = unclaimed(&slots);
    let mut k = 0;
    while k < remaining.len() {
        let i = remaining[k];
        let is_scalar = matches!(
            slots[i].as_ref().and_then(&target_of),
            Some(TargetType::Scalar)
        );

        match remaining.get(k + 1) {
            Some(&j) if is_scalar && is_plain_value(&slots[j]) => {
                let name = take_text(&mut slots, i);
                let value = take_text(&mut slots, j);
                options.push((i, name, vec![value]));
                k += 2;
            }
            _ => k += 1,
        }
    }

    // 3. Sequences.
    let remaining = unclaimed(&slots);
    let mut k = 0;
    while k < remaining.len() {
        let i = remaining[k];
        let is_sequence = matches!(
            slots[i].as_ref().and_then(&target_of),
            Some(TargetType::Sequence)
        );
        k += 1;

        if !is_sequence {
            continue;
        }

        let mut run = Vec::default();
        let mut assigned_run = false;

        while let Some(&j) = remaining.get(k) {
            if !is_plain_value(&slots[j]) {
                break;
            }

            // A run started by `--name=..` only continues over the pieces of that assignment.
            if run.is_empty() {
                assigned_run = is_assigned(&slots[j]);
            } else if assigned_run && !is_assigned(&slots[j]) {
                break;
            }

            run.push(j);
            k += 1;
        }

        if !run.is_empty() {
            let name = take_text(&mut slots, i);
            let values = run.into_iter().map(|j| take_text(&mut slots, j)).collect();
            options.push((i, name, values));
        }
    }

    // 4. Bare values & 5. errors.
    let mut values = Vec::default();
    let mut errors = Vec::default();

    for token in slots.into_iter().flatten() {
        if token.is_value() {
            values.push(token.into_text());
        } else {
            errors.push(token);
        }
    }

    options.sort_by_key(|(position, _, _)| *position);
    let partitions = TokenPartitions {
        options: options
            .into_iter()
            .map(|(_, name, values)| (name, values))
            .collect(),
        values,
        errors,
    };

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Partitioned into {} option groups, {} values, {} errors.",
            partitions.options.len(),
            partitions.values.len(),
            partitions.errors.len()
        );
    }

    partitions
}

fn unclaimed(slots: &[Option<Token>]) -> Vec<usize> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.as_ref().map(|_| i))
        .collect()
}

fn take_text(slots: &mut [Option<Token>], index: usize) -> String {
    slots[index]
        .take()
        .map(Token::into_text)
        .unwrap_or_else(|| unreachable!("internal error - token {index} already claimed"))
}

// Forced values only ever become positional values.
fn is_plain_value(slot: &Option<Token>) -> bool {
    matches!(slot, Some(token) if token.is_value() && !token.is_forced())
}

fn is_assigned(slot: &Option<Token>) -> bool {
    matches!(slot, Some(token) if token.is_explicitly_assigned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Switches: a, b; scalars: s, i; sequences: l (unbounded), m (max 2).
    fn type_lookup(name: &str) -> Option<TypeDescriptor> {
        match name {
            "a" | "b" => Some(TypeDescriptor::new(TargetType::Switch, None)),
            "s" | "i" => Some(TypeDescriptor::new(TargetType::Scalar, Some(1))),
            "l" => Some(TypeDescriptor::new(TargetType::Sequence, None)),
            "m" => Some(TypeDescriptor::new(TargetType::Sequence, Some(2))),
            _ => None,
        }
    }

    fn group(name: &str, values: &[&str]) -> (String, Vec<String>) {
        (
            name.to_string(),
            values.iter().map(|v| v.to_string()).collect(),
        )
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty() {
        let partitions = partition(Vec::default(), type_lookup);
        assert_eq!(partitions, TokenPartitions::default());
    }

    #[test]
    fn switches() {
        // Execute
        let partitions = partition(
            vec![Token::name("a"), Token::value("x"), Token::name("b")],
            type_lookup,
        );

        // Verify
        assert_eq!(
            partitions.options,
            vec![group("a", &["true"]), group("b", &["true"])]
        );
        assert_eq!(partitions.values, strings(&["x"]));
        assert_eq!(partitions.errors, vec![]);
    }

    #[test]
    fn switch_assignment() {
        let partitions = partition(
            vec![Token::name("a"), Token::assigned("false"), Token::value("x")],
            type_lookup,
        );
        assert_eq!(partitions.options, vec![group("a", &["false"])]);
        assert_eq!(partitions.values, strings(&["x"]));
    }

    #[rstest]
    #[case(vec![Token::name("s"), Token::value("v")], vec![group("s", &["v"])], vec![])]
    #[case(vec![Token::name("s"), Token::assigned("v")], vec![group("s", &["v"])], vec![])]
    #[case(vec![Token::name("s"), Token::value("v"), Token::value("w")], vec![group("s", &["v"])], vec!["w"])]
    #[case(
        vec![Token::name("s"), Token::value("v"), Token::name("i"), Token::value("1")],
        vec![group("s", &["v"]), group("i", &["1"])],
        vec![],
    )]
    #[case(
        vec![Token::name("s"), Token::value("v"), Token::name("s"), Token::value("w")],
        vec![group("s", &["v"]), group("s", &["w"])],
        vec![],
    )]
    // The switch is claimed first, which makes the scalar adjacent to its value.
    #[case(
        vec![Token::name("s"), Token::name("a"), Token::value("v")],
        vec![group("s", &["v"]), group("a", &["true"])],
        vec![],
    )]
    fn scalars(
        #[case] tokens: Vec<Token>,
        #[case] expected_options: Vec<(String, Vec<String>)>,
        #[case] expected_values: Vec<&str>,
    ) {
        // Execute
        let partitions = partition(tokens, type_lookup);

        // Verify
        assert_eq!(partitions.options, expected_options);
        assert_eq!(partitions.values, strings(&expected_values));
        assert_eq!(partitions.errors, vec![]);
    }

    #[rstest]
    #[case(
        vec![Token::name("l"), Token::value("x"), Token::value("y"), Token::value("z")],
        vec![group("l", &["x", "y", "z"])],
        vec![],
    )]
    // Scalars are claimed first, so the run continues over what remains.
    #[case(
        vec![Token::name("l"), Token::value("x"), Token::name("s"), Token::value("v"), Token::value("y")],
        vec![group("l", &["x", "y"]), group("s", &["v"])],
        vec![],
    )]
    #[case(
        vec![Token::name("l"), Token::assigned("x"), Token::assigned("y"), Token::value("z")],
        vec![group("l", &["x", "y"])],
        vec!["z"],
    )]
    #[case(
        vec![Token::name("l"), Token::value("x"), Token::forced("y")],
        vec![group("l", &["x"])],
        vec!["y"],
    )]
    // Runs are greedy; cardinality is validated after mapping.
    #[case(
        vec![Token::name("m"), Token::value("x"), Token::value("y"), Token::value("z")],
        vec![group("m", &["x", "y", "z"])],
        vec![],
    )]
    #[case(
        vec![Token::name("l"), Token::value("x"), Token::name("a"), Token::value("y")],
        vec![group("l", &["x", "y"]), group("a", &["true"])],
        vec![],
    )]
    #[case(
        vec![Token::name("l"), Token::value("x"), Token::name("l"), Token::value("y")],
        vec![group("l", &["x"]), group("l", &["y"])],
        vec![],
    )]
    #[case(
        vec![Token::name("l"), Token::value("x"), Token::name("unknown"), Token::value("y")],
        vec![group("l", &["x"])],
        vec!["y"],
    )]
    fn sequences(
        #[case] tokens: Vec<Token>,
        #[case] expected_options: Vec<(String, Vec<String>)>,
        #[case] expected_values: Vec<&str>,
    ) {
        // Execute
        let partitions = partition(tokens, type_lookup);

        // Verify
        assert_eq!(partitions.options, expected_options);
        assert_eq!(partitions.values, strings(&expected_values));
        assert_eq!(partitions.errors, vec![]);
    }

    #[rstest]
    #[case(vec![Token::name("s")], vec![Token::name("s")])]
    #[case(vec![Token::name("s"), Token::name("i"), Token::value("1")], vec![Token::name("s")])]
    #[case(vec![Token::name("l")], vec![Token::name("l")])]
    #[case(vec![Token::name("l"), Token::name("s")], vec![Token::name("l"), Token::name("s")])]
    #[case(vec![Token::name("s"), Token::forced("v")], vec![Token::name("s")])]
    #[case(vec![Token::name("unknown"), Token::value("v")], vec![Token::name("unknown")])]
    fn errors(#[case] tokens: Vec<Token>, #[case] expected: Vec<Token>) {
        let partitions = partition(tokens, type_lookup);
        assert_eq!(partitions.errors, expected);
    }

    #[test]
    fn values_keep_order() {
        let partitions = partition(
            vec![
                Token::value("1"),
                Token::name("a"),
                Token::value("2"),
                Token::forced("3"),
                Token::value("-"),
            ],
            type_lookup,
        );
        assert_eq!(partitions.values, strings(&["1", "2", "3", "-"]));
    }
}
