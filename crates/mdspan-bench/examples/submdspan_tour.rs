//! Slicing walkthrough.
//!
//! Demonstrates: build a 4x5x6 view → take a plane (row-major kept) → take a
//! strided column → slice a column-major view → write through a mutable
//! sub-view.

use mdspan::{
    ColumnMajor, Extents, Layout, Mapping, Mdspan, MdspanMut, MdspanRef, Storage, FULL_EXTENT,
};

type Cube = Extents![4, 5, 6];

fn describe<D, E, L>(label: &str, view: &Mdspan<D, E, L>)
where
    D: Storage,
    E: Extents,
    L: Layout,
{
    println!(
        "  {label:<28} extents={:?} layout={} strides={:?} offset_of_origin={}",
        view.extents(),
        L::NAME,
        view.mapping().strides().as_slice(),
        view.mapping().offset(&vec![0; E::RANK]),
    );
}

fn main() {
    println!("=== submdspan tour ===\n");

    let data: Vec<i32> = (0..120).collect();
    let cube = MdspanRef::<i32, Cube>::new(&data, Cube::default());
    describe("source", &cube);

    // --- Fix the first index: the trailing block is still dense ---
    let plane = cube.submdspan((2usize, FULL_EXTENT, FULL_EXTENT));
    describe("(2, :, :)", &plane);
    println!("    plane[[1, 3]] = {}", plane[[1, 3]]);

    // --- Fix the last index: rows are no longer adjacent ---
    let column = cube.submdspan((FULL_EXTENT, 1..3usize, 2usize));
    describe("(:, 1..3, 2)", &column);
    println!("    column[[3, 1]] = {} (source [3, 2, 2])", column[[3, 1]]);

    // --- Column-major keeps its layout for a leading block ---
    let fortran = MdspanRef::<i32, Cube, ColumnMajor>::new(&data, Cube::default());
    let slab = fortran.submdspan((FULL_EXTENT, 1..3usize, 4usize));
    describe("column-major (:, 1..3, 4)", &slab);

    // --- Writes through a mutable sub-view land in the buffer ---
    let mut buf = vec![0i32; 24];
    {
        let mut m = MdspanMut::<i32, Extents![2, 3, 4]>::new(&mut buf, Default::default());
        let mut diag = m.view_mut().submdspan((1usize, FULL_EXTENT, FULL_EXTENT));
        for i in 0..3 {
            diag[[i, i]] = 1;
        }
    }
    println!("\n  buffer after writing a diagonal into plane 1:");
    for row in buf.chunks(4) {
        println!("    {row:?}");
    }
}
