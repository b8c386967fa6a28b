use planilla_turnos::excel::{clear_data_area, resolve_anchor, write_cell, CellValue, Grid, MemoryGrid, MergedRegion};

fn grid_con_combinaciones() -> MemoryGrid {
    let mut g = MemoryGrid::with_extent(40, 30);
    g.merge_a1("C6:E6").merge_a1("B11:B12").merge_a1("G20:H21");
    g
}

#[test]
fn test_resolve_anchor_en_toda_la_region() {
    let g = grid_con_combinaciones();
    let region = MergedRegion::new(20, 7, 21, 8);
    for (r, c) in region.cells() {
        assert_eq!(resolve_anchor(&g, r, c), (20, 7));
    }
    assert_eq!(resolve_anchor(&g, 6, 5), (6, 3));
    assert_eq!(resolve_anchor(&g, 7, 5), (7, 5));
}

#[test]
fn test_write_cell_escribe_en_ancla_ultimo_gana() {
    let mut g = grid_con_combinaciones();
    write_cell(&mut g, 6, 4, "a");
    write_cell(&mut g, 6, 5, "b");
    assert_eq!(g.value(6, 3), Some(CellValue::Text("b".into())));
    assert_eq!(g.value(6, 4), None);
    assert_eq!(g.value(6, 5), None);

    write_cell(&mut g, 6, 3, 15u32);
    assert_eq!(g.text(6, 3), "15");
}

#[test]
fn test_clear_data_area_respeta_combinaciones_e_idempotente() {
    let mut g = grid_con_combinaciones();
    g.set_value(20, 7, Some("combinada".into()));
    g.set_value(11, 2, Some("nombre".into()));
    g.set_value(11, 3, Some("08:00".into()));
    g.set_value(35, 29, Some("x".into()));
    g.set_value(5, 16, Some("ENERO".into()));

    clear_data_area(&mut g, 11, 3);
    let una_vez: Vec<_> = g.filled().map(|(k, v)| (*k, v.clone())).collect();

    assert_eq!(g.text(20, 7), "combinada");
    assert_eq!(g.text(11, 2), "nombre");
    assert_eq!(g.text(5, 16), "ENERO");
    assert_eq!(g.value(11, 3), None);
    assert_eq!(g.value(35, 29), None);

    clear_data_area(&mut g, 11, 3);
    let dos_veces: Vec<_> = g.filled().map(|(k, v)| (*k, v.clone())).collect();
    assert_eq!(una_vez, dos_veces);
    assert_eq!(g.extent(), (40, 30));
}
