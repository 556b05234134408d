use mdspan::{
    submdspan, ColumnMajor, DExtents, Extents, Mapping, MdspanMut, MdspanRef, RowMajor, Strided,
    FULL_EXTENT,
};
use proptest::prelude::*;

fn iota(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

#[test]
fn documented_example_full_range_index() {
    let data = iota(120);
    let src = MdspanRef::<i64, Extents![4, 5, 6]>::new(&data, Default::default());
    let sub = submdspan(src, (FULL_EXTENT, 1..3usize, 2usize));

    let _: &MdspanRef<'_, i64, Extents![4, dyn], Strided> = &sub;
    assert_eq!(sub.rank(), 2);
    assert_eq!((sub.extent(0), sub.extent(1)), (4, 2));
    assert_eq!(sub[[0, 0]] as usize, src.mapping().offset(&[0, 1, 2]));
    assert!(!sub.is_contiguous());
}

#[test]
fn size_matches_kept_extents() {
    let data = iota(120);
    let src = MdspanRef::<i64, DExtents<3>>::from_dynamic(&data, &[4, 5, 6]);
    let sub = src.submdspan((1..4usize, 2usize, ..));
    assert_eq!(sub.size(), 3 * 6);
    let _: &MdspanRef<'_, i64, DExtents<2>, Strided> = &sub;
}

#[test]
fn column_major_slab_stays_column_major() {
    let data = iota(60);
    let src = MdspanRef::<i64, Extents![3, 4, 5], ColumnMajor>::new(&data, Default::default());
    let slab: MdspanRef<'_, i64, Extents![3, dyn], ColumnMajor> =
        src.submdspan((FULL_EXTENT, 1..3usize, 4usize));
    assert!(slab.is_contiguous());
    assert_eq!(slab.data()[0], src[[0, 1, 4]]);
    assert_eq!(slab[[2, 1]], src[[2, 2, 4]]);
}

#[test]
fn zeroing_a_plane_through_a_mutable_sub_view() {
    let mut data = vec![1i64; 2 * 3 * 4];
    let mut m = MdspanMut::<i64, Extents![2, 3, 4]>::new(&mut data, Default::default());
    let mut plane: MdspanMut<'_, i64, Extents![3, 4], RowMajor> =
        m.view_mut().submdspan((1usize, .., ..));
    for i in 0..3 {
        for j in 0..4 {
            plane[[i, j]] = 0;
        }
    }
    assert_eq!(m[[0, 2, 3]], 1);
    assert_eq!(m[[1, 2, 3]], 0);
    drop(m);
    assert_eq!(data.iter().filter(|&&x| x == 0).count(), 12);
    assert!(data[..12].iter().all(|&x| x == 1));
}

proptest! {
    #[test]
    fn sub_view_reads_the_source_elements(
        a in 1usize..5,
        b in 1usize..5,
        c in 1usize..5,
        fixed in 0usize..5,
        lo in 0usize..5,
        len in 0usize..5,
    ) {
        let fixed = fixed % a;
        let lo = lo % (b + 1);
        let hi = (lo + len).min(b);
        let data = iota(a * b * c);
        let src = MdspanRef::<i64, DExtents<3>>::from_dynamic(&data, &[a, b, c]);
        let sub = src.submdspan((fixed, lo..hi, FULL_EXTENT));

        prop_assert_eq!(sub.extent(0), hi - lo);
        prop_assert_eq!(sub.extent(1), c);
        for j in 0..hi - lo {
            for k in 0..c {
                prop_assert_eq!(sub[[j, k]], src[[fixed, lo + j, k]]);
            }
        }
    }
}
