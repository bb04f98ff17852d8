mod base_cell;
mod cell_index;
mod directed_edge_index;
mod direction;
mod edge;
mod face_set;
mod index_mode;
mod localij;
mod polyfill;
mod resolution;
mod vertex;
mod vertex_index;

#[test]
fn max_grid_disk_size_overflow() {
    assert_eq!(h3o::max_grid_disk_size(4294967295), 569_707_381_193_162);
}
