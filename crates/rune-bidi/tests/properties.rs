use proptest::prelude::*;
use proptest::sample::select;
use rune_bidi::{BidiClass, BidiConfig, CharRecord, Paragraph, ReorderConfig, ReorderMode};

fn classes() -> impl Strategy<Value = Vec<BidiClass>> {
    prop::collection::vec(select(BidiClass::ALL.to_vec()), 0..48)
}

fn run(classes: &[BidiClass], mode: ReorderMode) -> Paragraph {
    let records = classes
        .iter()
        .enumerate()
        .map(|(i, &class)| CharRecord::new(char::from_u32(0x41 + i as u32).unwrap_or('?'), class))
        .collect();
    let mut para = Paragraph::new(records);
    let config = BidiConfig {
        reorder: ReorderConfig { mode },
        ..BidiConfig::default()
    };
    para.process(&config).unwrap();
    para
}

proptest! {
    #[test]
    fn display_indices_are_a_permutation(input in classes()) {
        let para = run(&input, ReorderMode::DisplayIndex);
        let mut indices: Vec<usize> = para.records().iter().map(|r| r.display_order_index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..para.len()).collect::<Vec<_>>());
    }

    #[test]
    fn formatting_codes_are_removed_and_originals_kept(input in classes()) {
        let para = run(&input, ReorderMode::DisplayIndex);
        let expected: Vec<BidiClass> = input.iter().copied().filter(|c| !c.is_removed_by_x9()).collect();
        let originals: Vec<BidiClass> = para.records().iter().map(|r| r.original_class()).collect();
        prop_assert_eq!(originals, expected);
    }

    #[test]
    fn levels_never_drop_below_paragraph_level(input in classes()) {
        let para = run(&input, ReorderMode::DisplayIndex);
        let para_level = para.paragraph_level().unwrap();
        prop_assert!(para.records().iter().all(|r| r.level >= para_level));
    }

    #[test]
    fn output_is_deterministic(input in classes()) {
        let a = run(&input, ReorderMode::DisplayIndex);
        let b = run(&input, ReorderMode::DisplayIndex);
        prop_assert_eq!(a.records(), b.records());
    }

    #[test]
    fn reorder_modes_agree(input in classes()) {
        let indexed = run(&input, ReorderMode::DisplayIndex);
        let swapped = run(&input, ReorderMode::SwapRecords);
        prop_assert_eq!(indexed.visual_order(), swapped.visual_order());
        prop_assert_eq!(indexed.visual_string(), swapped.visual_string());
    }

    #[test]
    fn pure_ltr_is_identity(len in 0usize..64) {
        let para = run(&vec![BidiClass::L; len], ReorderMode::DisplayIndex);
        prop_assert_eq!(para.visual_order(), (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn pure_rtl_is_reversed(len in 1usize..64) {
        let para = run(&vec![BidiClass::R; len], ReorderMode::DisplayIndex);
        prop_assert_eq!(para.paragraph_level(), Some(1));
        prop_assert_eq!(para.visual_order(), (0..len).rev().collect::<Vec<_>>());
    }
}
