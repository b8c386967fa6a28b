use chrono::NaiveDate;
use planilla_turnos::excel::{CellValue, Grid, MemoryGrid};
use planilla_turnos::layout::{columna_para, generar_planilla, TemplateLayout};
use planilla_turnos::models::{RegistroCrudo, SemanaVentana};
use serde_json::{json, Value};

fn registros(v: Value) -> Vec<RegistroCrudo> {
    v.as_array()
        .expect("arreglo JSON")
        .iter()
        .map(|d| d.as_object().cloned().expect("objeto JSON"))
        .collect()
}

fn ventana() -> SemanaVentana {
    SemanaVentana::new(
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 21).unwrap(),
    )
    .unwrap()
}

fn plantilla_vacia() -> MemoryGrid {
    MemoryGrid::with_extent(60, 30)
}

#[test]
fn test_columnas_por_dia() {
    let layout = TemplateLayout::default();
    let esperadas = [3, 7, 11, 15, 19, 23, 27];
    for (i, col) in esperadas.iter().enumerate() {
        let fecha = NaiveDate::from_ymd_opt(2024, 1, 15 + i as u32).unwrap();
        assert_eq!(columna_para(&layout, fecha), Some(*col));
    }

    let mut sin_domingo = TemplateLayout::default();
    sin_domingo.columnas_dia[6] = None;
    assert_eq!(columna_para(&sin_domingo, NaiveDate::from_ymd_opt(2024, 1, 21).unwrap()), None);
}

#[test]
fn test_encabezados_mes_y_rango() {
    let mut g = plantilla_vacia();
    generar_planilla(&mut g, &ventana(), &[], &TemplateLayout::default());
    assert_eq!(g.text(5, 16), "ENERO");
    assert_eq!(g.text(5, 24), "del 15 al 21");
}

#[test]
fn test_lunes_en_columna_3() {
    let mut g = plantilla_vacia();
    let recs = registros(json!([
        {"fecha": "15/01/2024", "nombre": "Ana", "cargo": "supervisor", "entrada": "09:00", "salida": "18:00"}
    ]));
    let resumen = generar_planilla(&mut g, &ventana(), &recs, &TemplateLayout::default());

    assert_eq!(g.value(6, 3), Some(CellValue::Number(15.0)));
    assert_eq!(g.text(11, 2), "Ana");
    assert_eq!(g.text(12, 2), "supervisor");
    assert_eq!(g.text(11, 3), "09:00");
    assert_eq!(g.text(11, 5), "18:00");
    assert_eq!(resumen.empleados, 1);
    assert_eq!(resumen.turnos_escritos, 1);
    assert_eq!(resumen.fechas, vec![NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()]);
}

#[test]
fn test_turno_partido() {
    let mut g = plantilla_vacia();
    let recs = registros(json!([{
        "fecha": "15/01/2024", "nombre": "Luis",
        "usaTurnoPartido": "si",
        "entrada1": "08:00", "salida1": "12:00",
        "entrada2": "13:00", "salida2": "17:00",
        "receso": "no aplica"
    }]));
    generar_planilla(&mut g, &ventana(), &recs, &TemplateLayout::default());

    assert_eq!(g.text(11, 3), "08:00");
    assert_eq!(g.value(11, 4), Some(CellValue::Text(String::new())));
    assert_eq!(g.text(11, 5), "12:00");
    assert_eq!(g.text(12, 3), "13:00");
    assert_eq!(g.value(12, 4), None);
    assert_eq!(g.text(12, 5), "17:00");
}

#[test]
fn test_turno_partido_sin_segundo_tramo() {
    let mut g = plantilla_vacia();
    let recs = registros(json!([{
        "fecha": "16/01/2024", "nombre": "Luis",
        "usaTurnoPartido": true,
        "entrada1": "08:00", "salida1": "12:00",
        "receso": "30 minutos"
    }]));
    generar_planilla(&mut g, &ventana(), &recs, &TemplateLayout::default());

    assert_eq!(g.text(11, 7), "08:00");
    assert_eq!(g.text(11, 8), "30");
    assert_eq!(g.text(11, 9), "12:00");
    assert_eq!(g.value(12, 7), None);
    assert_eq!(g.value(12, 9), None);
}

#[test]
fn test_turno_partido_solo_salida2() {
    let mut g = plantilla_vacia();
    let recs = registros(json!([{
        "fecha": "17/01/2024", "nombre": "Luis",
        "usaTurnoPartido": "yes",
        "entrada1": "08:00", "salida1": "12:00",
        "salida2": "17:00",
        "receso": "no aplica"
    }]));
    generar_planilla(&mut g, &ventana(), &recs, &TemplateLayout::default());

    assert_eq!(g.text(11, 11), "08:00");
    assert_eq!(g.text(11, 13), "12:00");
    assert_eq!(g.value(12, 11), Some(CellValue::Text(String::new())));
    assert_eq!(g.value(12, 12), None);
    assert_eq!(g.text(12, 13), "17:00");
}

#[test]
fn test_turno_simple_y_estado() {
    let mut g = plantilla_vacia();
    let recs = registros(json!([
        {"fecha": "2024-01-17", "nombre": "Eva", "entrada": "09:00", "salida": "18:00", "receso": "30 minutos"},
        {"fecha": "18/01/2024", "nombre": "eva", "ESTADO": "VACACIONES"}
    ]));
    let resumen = generar_planilla(&mut g, &ventana(), &recs, &TemplateLayout::default());

    assert_eq!(resumen.empleados, 1);
    assert_eq!(g.text(11, 11), "09:00");
    assert_eq!(g.text(11, 12), "30");
    assert_eq!(g.text(11, 13), "18:00");
    assert_eq!(g.text(13, 15), "VACACIONES");
    assert_eq!(g.value(13, 11), None);
    assert_eq!(g.value(12, 2), None);
}

#[test]
fn test_fecha_invalida_no_genera_fila() {
    let mut g = plantilla_vacia();
    let recs = registros(json!([
        {"fecha": "not-a-date", "nombre": "Zoe", "cargo": "supervisor", "entrada": "07:00"},
        {"fecha": "19/01/2024", "nombre": "Ana", "cargo": "part-time", "entrada": "10:00"}
    ]));
    let resumen = generar_planilla(&mut g, &ventana(), &recs, &TemplateLayout::default());

    assert_eq!(resumen.descartados, 1);
    assert_eq!(resumen.empleados, 1);
    assert_eq!(g.text(11, 2), "Ana");
    assert_eq!(g.text(11, 19), "10:00");
    assert_eq!(g.value(16, 2), None);
    assert_eq!(g.value(6, 19), Some(CellValue::Number(19.0)));
    assert_eq!(g.value(6, 3), None);
}

#[test]
fn test_bloques_por_cargo() {
    let mut g = plantilla_vacia();
    let recs = registros(json!([
        {"fecha": "15/01/2024", "nombre": "Beto", "cargo": "part-time", "entrada": "10:00"},
        {"fecha": "15/01/2024", "nombre": "Carla", "cargo": "Supervisor", "entrada": "08:00"},
        {"fecha": "16/01/2024", "nombre": "Beto", "entrada": "11:00"}
    ]));
    generar_planilla(&mut g, &ventana(), &recs, &TemplateLayout::default());

    assert_eq!(g.text(11, 2), "Carla");
    assert_eq!(g.text(11, 3), "08:00");
    assert_eq!(g.text(16, 2), "Beto");
    assert_eq!(g.text(17, 2), "part-time");
    assert_eq!(g.text(16, 3), "10:00");
    assert_eq!(g.text(16, 7), "11:00");
}

#[test]
fn test_limpia_datos_previos_y_respeta_combinaciones() {
    let mut g = plantilla_vacia();
    g.merge_a1("D11:E11");
    g.set_value(11, 4, Some("fijo".into()));
    g.set_value(30, 10, Some("semana anterior".into()));

    let recs = registros(json!([
        {"fecha": "15/01/2024", "nombre": "Ana", "entrada": "09:00", "receso": "45", "salida": "18:00"}
    ]));
    generar_planilla(&mut g, &ventana(), &recs, &TemplateLayout::default());

    assert_eq!(g.value(30, 10), None);
    assert_eq!(g.text(11, 3), "09:00");
    // receso y salida caen en la misma combinación: queda la última escritura
    assert_eq!(g.text(11, 4), "18:00");
    assert_eq!(g.value(11, 5), None);
}
