/*
 * Equigen - Result Combiner
 * Design notes:
 * 1. Pure function: no randomness, no I/O, same inputs give same outputs.
 * 2. Phenotype text joins coat, markings and mutations with spaces,
 *    skipping empty segments, then appends " + <oddball>" if one rolled.
 * 3. The oddball never contributes a genotype term.
 */

use super::coat::Selection;
use super::multi::MultiSelection;

/// Assembles the combined phenotype and genotype strings from the four
/// independent roll results.
pub fn combine(
    coat: &Selection,
    markings: Option<&MultiSelection>,
    mutations: Option<&MultiSelection>,
    oddball: Option<&str>,
) -> (String, String) {
    let marking_phenotype = markings.map(MultiSelection::phenotype).unwrap_or_default();
    let marking_genotype = markings.map(MultiSelection::genotype).unwrap_or_default();
    let mutation_phenotype = mutations.map(MultiSelection::phenotype).unwrap_or_default();
    let mutation_genotype = mutations.map(MultiSelection::genotype).unwrap_or_default();

    let mut phenotype = join_segments(&[&coat.phenotype, &marking_phenotype, &mutation_phenotype]);
    let genotype = join_segments(&[&coat.genotype, &marking_genotype, &mutation_genotype]);

    if let Some(label) = oddball {
        phenotype.push_str(" + ");
        phenotype.push_str(label);
    }

    (phenotype, genotype)
}

fn join_segments(segments: &[&str]) -> String {
    segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join(" ")
}
