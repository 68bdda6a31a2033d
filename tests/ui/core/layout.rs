use adminboard::ui::layout::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_kpi_columns_breakpoints() {
    assert_eq!(LayoutManager::kpi_columns(150), 4);
    assert_eq!(LayoutManager::kpi_columns(120), 4);
    assert_eq!(LayoutManager::kpi_columns(119), 2);
    assert_eq!(LayoutManager::kpi_columns(60), 2);
    assert_eq!(LayoutManager::kpi_columns(59), 1);
}

#[test]
fn test_main_layout_reserves_status_line() {
    let areas = LayoutManager::main_layout(Rect::new(0, 0, 120, 40), 30, false);
    assert_eq!(areas.sidebar.width, 30);
    assert_eq!(areas.main.x, 30);
    assert_eq!(areas.main.width, 90);
    assert_eq!(areas.status.height, 1);
    assert_eq!(areas.status.y, 39);
    assert_eq!(areas.sidebar.height, 39);
}

#[test]
fn test_sidebar_gives_way_on_small_screens() {
    let areas = LayoutManager::main_layout(Rect::new(0, 0, 40, 20), 30, false);
    assert_eq!(areas.sidebar.width, 20);
    assert_eq!(areas.main.width, 20);

    let icons = LayoutManager::main_layout(Rect::new(0, 0, 120, 20), 30, true);
    assert_eq!(icons.sidebar.width, 7);
}

#[test]
fn test_grid_fills_rows_in_order() {
    let cells = LayoutManager::grid(Rect::new(0, 0, 100, 10), 3, 2, 5);
    assert_eq!(cells.len(), 3);
    assert_eq!(cells[0].y, 0);
    assert_eq!(cells[1].y, 0);
    assert!(cells[0].x < cells[1].x);
    assert_eq!(cells[2].y, 5);
    assert_eq!(cells[2].x, 0);
}

#[test]
fn test_grid_clips_at_bottom() {
    let cells = LayoutManager::grid(Rect::new(0, 0, 40, 7), 3, 1, 5);
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[1].height, 2);
}

#[test]
fn test_anchored_rect_stays_inside() {
    let bounds = Rect::new(0, 0, 50, 20);
    assert_eq!(LayoutManager::anchored_rect(5, 5, 10, 4, bounds), Rect::new(5, 5, 10, 4));
    assert_eq!(LayoutManager::anchored_rect(45, 18, 10, 4, bounds), Rect::new(40, 16, 10, 4));
    assert_eq!(LayoutManager::anchored_rect(0, 0, 80, 30, bounds), bounds);
}
