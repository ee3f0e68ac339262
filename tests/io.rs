//! Test input/output
use snakegrid::{
    shapes::uniform_block,
    traits::{Coordinates, RONExport, RONImport},
    types::Direction,
    GeometryError, SinusoidalCoordinates, SinusoidalParameters,
};

#[test]
fn test_ron_round_trip() {
    let block = uniform_block([16, 8, 1], 3, [[0.0, 40.0], [-5.0, 5.0], [0.0, 1.0]]).unwrap();
    let c = SinusoidalCoordinates::new(block, SinusoidalParameters::default()).unwrap();
    let s = c.to_ron_string().unwrap();

    let c2 = SinusoidalCoordinates::<f64>::from_ron_string(&s).unwrap();
    assert_eq!(c2.parameters(), c.parameters());
    for d in Direction::ALL {
        assert_eq!(c2.block().axis(d).faces(), c.block().axis(d).faces());
        assert_eq!(c2.block().active_range(d), c.block().active_range(d));
    }
    for i in 0..c.table().cell_count() {
        assert_eq!(c2.table().width(i), c.table().width(i));
        assert_eq!(c2.table().source(i), c.table().source(i));
    }
}

#[test]
fn test_ron_file_round_trip() {
    let block = uniform_block([4, 4, 4], 1, [[0.0, 1.0], [0.0, 1.0], [0.0, 1.0]]).unwrap();
    let c = SinusoidalCoordinates::new(block, SinusoidalParameters::new(0.5, 2.0).unwrap()).unwrap();
    c.export_as_ron("_test_io_coordinates.ron").unwrap();
    let c2 = SinusoidalCoordinates::<f64>::import_from_ron("_test_io_coordinates.ron").unwrap();
    assert_eq!(c2.block().total_cell_count(), 216);
}

#[test]
fn test_import_rejects_ghost_width() {
    let s = "(parameters: (amplitude: 1.0, wavenumber: 1.0), ghost: (2, 0, 0), \
             faces: ([0.0, 1.0, 2.0, 3.0, 4.0], [0.0, 1.0], [0.0, 1.0]))";
    let e = SinusoidalCoordinates::<f64>::from_ron_string(s).unwrap_err();
    assert!(e.is_configuration());
    assert!(matches!(e, GeometryError::InvalidGhostWidth { direction: Direction::X, .. }));
}

#[test]
fn test_import_missing_file() {
    assert!(matches!(
        SinusoidalCoordinates::<f64>::import_from_ron("_does_not_exist.ron"),
        Err(GeometryError::Io(_))
    ));
}
