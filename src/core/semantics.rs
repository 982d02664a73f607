use super::{Alphabet, Formula, Valuation};

/// Enumerates the valuations of the alphabet that satisfy every formula.
///
/// When no alphabet is given, the atoms occurring in the formulas are used.
/// The enumeration is lazy: consumers stopping at the first model do not pay for the others.
pub fn models<'a, I>(formulas: I, alphabet: Option<&Alphabet>) -> impl Iterator<Item = Valuation> + 'a
where
    I: IntoIterator<Item = &'a Formula>,
{
    let formulas = formulas.into_iter().collect::<Vec<&Formula>>();
    let alphabet = alphabet
        .cloned()
        .unwrap_or_else(|| Alphabet::of_formulas(formulas.iter().copied()));
    alphabet
        .valuations(false)
        .filter(move |v| formulas.iter().all(|f| f.evaluate(v)))
}

/// Returns `true` iff some valuation satisfies every formula.
pub fn sat<'a, I>(formulas: I, alphabet: Option<&Alphabet>) -> bool
where
    I: IntoIterator<Item = &'a Formula>,
{
    models(formulas, alphabet).next().is_some()
}

/// Returns `true` iff no valuation satisfies every formula.
pub fn unsat<'a, I>(formulas: I, alphabet: Option<&Alphabet>) -> bool
where
    I: IntoIterator<Item = &'a Formula>,
{
    !sat(formulas, alphabet)
}

/// Returns `true` iff every valuation of the alphabet satisfies every formula.
///
/// When no alphabet is given, the atoms occurring in the formulas are used.
pub fn valid<'a, I>(formulas: I, alphabet: Option<&Alphabet>) -> bool
where
    I: IntoIterator<Item = &'a Formula>,
{
    let formulas = formulas.into_iter().collect::<Vec<&Formula>>();
    let alphabet = alphabet
        .cloned()
        .unwrap_or_else(|| Alphabet::of_formulas(formulas.iter().copied()));
    alphabet
        .valuations(false)
        .all(|v| formulas.iter().all(|f| f.evaluate(&v)))
}

/// Returns `true` iff the formulas entail the target, that is iff the formulas and the negation of the target are unsatisfiable.
pub fn entails<'a, I>(formulas: I, target: &Formula) -> bool
where
    I: IntoIterator<Item = &'a Formula>,
{
    let negated_target = target.negate();
    let mut all_formulas: Vec<&Formula> = formulas.into_iter().collect();
    all_formulas.push(&negated_target);
    unsat(all_formulas, None)
}
