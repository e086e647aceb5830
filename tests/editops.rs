use levenmed::distance::distance;
use levenmed::editops::{
    apply, editops_find, editops_matching_blocks, editops_to_opcodes, invert, normalize,
    opcodes_apply, opcodes_invert, opcodes_matching_blocks, opcodes_to_editops,
};
use rand::distributions::{Alphanumeric, DistString};
use rand::prelude::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn editops_apply_reconstructs_target_over_random_pairs() {
    let mut rng = StdRng::seed_from_u64(201);
    for _ in 0..40 {
        let a = Alphanumeric.sample_string(&mut rng, rng.gen_range(0..50));
        let b = Alphanumeric.sample_string(&mut rng, rng.gen_range(0..50));
        let ops = editops_find(a.as_bytes(), b.as_bytes());
        assert_eq!(apply(a.as_bytes(), b.as_bytes(), &ops), b.as_bytes());
        assert_eq!(normalize(&ops).len(), distance(a.as_bytes(), b.as_bytes(), false));
    }
}

#[test]
fn opcodes_roundtrip_through_editops() {
    let mut rng = StdRng::seed_from_u64(202);
    for _ in 0..40 {
        let a = Alphanumeric.sample_string(&mut rng, rng.gen_range(0..50));
        let b = Alphanumeric.sample_string(&mut rng, rng.gen_range(0..50));
        let ops = editops_find(a.as_bytes(), b.as_bytes());
        let bops = editops_to_opcodes(&ops, a.len(), b.len());
        assert_eq!(opcodes_apply(a.as_bytes(), b.as_bytes(), &bops), b.as_bytes());

        let recovered = opcodes_to_editops(&bops, false);
        assert_eq!(apply(a.as_bytes(), b.as_bytes(), &recovered), b.as_bytes());
    }
}

#[test]
fn inverted_editops_reverse_the_transformation() {
    let mut rng = StdRng::seed_from_u64(203);
    for _ in 0..40 {
        let a = Alphanumeric.sample_string(&mut rng, rng.gen_range(0..50));
        let b = Alphanumeric.sample_string(&mut rng, rng.gen_range(0..50));
        let mut ops = editops_find(a.as_bytes(), b.as_bytes());
        invert(&mut ops);
        assert_eq!(apply(b.as_bytes(), a.as_bytes(), &ops), a.as_bytes());
    }
}

#[test]
fn inverted_opcodes_reverse_the_transformation() {
    let mut rng = StdRng::seed_from_u64(204);
    for _ in 0..40 {
        let a = Alphanumeric.sample_string(&mut rng, rng.gen_range(0..50));
        let b = Alphanumeric.sample_string(&mut rng, rng.gen_range(0..50));
        let ops = editops_find(a.as_bytes(), b.as_bytes());
        let mut bops = editops_to_opcodes(&ops, a.len(), b.len());
        opcodes_invert(&mut bops);
        assert_eq!(opcodes_apply(b.as_bytes(), a.as_bytes(), &bops), a.as_bytes());
    }
}

#[test]
fn matching_blocks_agree_between_editops_and_opcodes() {
    let mut rng = StdRng::seed_from_u64(205);
    for _ in 0..40 {
        let a = Alphanumeric.sample_string(&mut rng, rng.gen_range(0..50));
        let b = Alphanumeric.sample_string(&mut rng, rng.gen_range(0..50));
        let ops = editops_find(a.as_bytes(), b.as_bytes());
        let bops = editops_to_opcodes(&ops, a.len(), b.len());

        let from_editops = editops_matching_blocks(a.len(), b.len(), &ops);
        let from_opcodes = opcodes_matching_blocks(a.len(), &bops);
        assert_eq!(from_editops, from_opcodes);
    }
}
