use annobit_annotation_rs::{AnnotatedSequence, Annotation, Feature};
use annobit_core_rs::loc::{Defect, Location, LocationOp, Strand};
use annobit_core_rs::seq::{NucleotideSequence, Sequence};
use eyre::Result;
use itertools::Itertools;

fn cds(gene: &str, locs: impl IntoIterator<Item = Location<i64>>) -> Feature<i64> {
    Feature::new("CDS", locs, [("gene", gene)])
}

fn annotation() -> Annotation<i64> {
    let first = Annotation::from(vec![
        cds("test1", [Location::forward(-10, 30)]),
        cds("test2", [Location::forward(20, 50)]),
    ]);
    let second = Annotation::from(vec![
        cds("test3", [Location::forward(100, 130)]),
        cds("test4", [Location::forward(150, 250)]),
    ]);
    first + second + cds("test5", [Location::forward(-50, 200)])
}

fn by_gene(annotation: &Annotation<i64>) -> Vec<(String, Vec<Location<i64>>)> {
    annotation
        .iter()
        .map(|x| (x.qual()["gene"].clone(), x.locs().to_vec()))
        .sorted()
        .collect()
}

#[test]
fn sliced_features_are_truncated_and_flagged() {
    let sliced = annotation().slice(40..150);
    assert_eq!(
        by_gene(&sliced),
        vec![
            (
                "test2".to_string(),
                vec![Location::new(40, 50, Strand::Forward, Defect::MISS_LEFT)]
            ),
            ("test3".to_string(), vec![Location::forward(100, 130)]),
            (
                "test5".to_string(),
                vec![Location::new(
                    40,
                    149,
                    Strand::Forward,
                    Defect::MISS_LEFT | Defect::MISS_RIGHT
                )]
            ),
        ]
    );
}

#[test]
fn sliced_features_stay_inside_the_window() {
    let annotation = annotation();
    for (start, stop) in [(-100, -20), (-20, 25), (0, 1), (40, 150), (130, 131), (200, 400)] {
        let sliced = annotation.slice(start..stop);
        for feature in &sliced {
            for loc in feature.locs() {
                assert!(loc.first() >= start, "{loc} in {start}..{stop}");
                assert!(loc.last() <= stop - 1, "{loc} in {start}..{stop}");
            }
        }

        // Features outside of the window are dropped
        let expected = annotation
            .iter()
            .filter(|x| x.locs().iter().any(|loc| loc.overlaps(start, stop - 1)))
            .count();
        assert_eq!(sliced.len(), expected);
    }
}

#[test]
fn slicing_copies_features() {
    let annotation = annotation();
    let before = annotation.clone();
    let _ = annotation.slice(40..150);
    assert_eq!(annotation, before);
    assert_eq!(annotation.slice(..), before);
}

#[test]
fn merging_keeps_duplicates() {
    let annotation = annotation();
    let doubled = &annotation + &annotation;
    assert_eq!(doubled.get_features().len(), 2 * annotation.get_features().len());
}

#[test]
fn annotated_sequence_slicing() -> Result<()> {
    let sequence = NucleotideSequence::new("ACGT".repeat(100))?;
    let annotated = AnnotatedSequence::new(annotation(), sequence, -50);

    let sliced = annotated.slice(40..150)?;
    assert_eq!(sliced.sequence().len(), 110);
    assert_eq!(sliced.annotation(), &annotated.annotation().slice(40..150));
    assert_eq!(sliced.sequence_start(), -50);

    // Storage index 90 holds position 40
    assert_eq!(sliced.sequence().get(0)?, annotated.symbol(40)?);
    Ok(())
}

#[test]
fn extract_assign_round_trip() -> Result<()> {
    let sequence = NucleotideSequence::new("ACGT".repeat(100))?;
    let mut annotated = AnnotatedSequence::new(annotation(), sequence, -50);
    let before = annotated.clone();

    for feature in annotated.annotation().get_features() {
        let extracted = annotated.extract(&feature)?;
        assert_eq!(extracted.len() as i64, feature.locs()[0].span());
        annotated.assign(&feature, &extracted)?;
    }
    assert_eq!(annotated, before);
    Ok(())
}
