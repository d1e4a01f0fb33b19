//! Integrationstests fuer die Viewer-Synchronisation:
//! - Draw-Order-Registry bei add/remove
//! - Registry-Clear + Redraw bei reorder/swap
//! - Attachment-Lifecycle (attach, reattach, detach, Expiry)

use glam::Vec2;
use layer_viewer::{ImageLayer, LayerHandle, LayerList, ShapeLayer, Viewer};

fn shape(name: &str) -> LayerHandle {
    ShapeLayer::new(
        name,
        vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)],
        [1.0, 0.0, 1.0, 1.0],
    )
    .into_handle()
}

#[test]
fn test_append_traegt_layer_in_die_draw_order_registry_ein() {
    let viewer = Viewer::new("viewer");
    let mut layers = LayerList::with_owner(&viewer);

    let a = shape("a");
    let b = ImageLayer::new("b", Vec2::new(64.0, 64.0)).into_handle();
    layers.append(a.clone());
    layers.append(b.clone());

    let v = viewer.borrow();
    assert_eq!(v.canvas.draw_order.len(), 2);
    assert_eq!(v.canvas.draw_order.get(&a), Some(&-1));
    assert_eq!(v.canvas.draw_order.get(&b), Some(&-2));
    assert_eq!(v.canvas.update_count(), 2);
}

#[test]
fn test_remove_nimmt_layer_aus_der_registry() {
    let viewer = Viewer::new("viewer");
    let mut layers = LayerList::with_owner(&viewer);

    let a = shape("a");
    let b = shape("b");
    layers.append(a.clone());
    layers.append(b.clone());

    layers.remove(&a).expect("a ist enthalten");

    let v = viewer.borrow();
    assert!(!v.canvas.draw_order.contains_key(&a));
    assert!(v.canvas.draw_order.contains_key(&b));
    assert_eq!(v.canvas.update_count(), 3);
}

#[test]
fn test_reorder_leert_die_registry_und_stoesst_redraw_an() {
    let viewer = Viewer::new("viewer");
    let mut layers = LayerList::with_owner(&viewer);
    layers.append(shape("a"));
    layers.append(shape("b"));

    viewer.borrow_mut().canvas.take_pending_redraw();
    let updates_before = viewer.borrow().canvas.update_count();

    layers.reorder([1usize, 0]).expect("Permutation gueltig");

    let v = viewer.borrow();
    assert!(v.canvas.draw_order.is_empty(), "Registry geleert");
    assert!(v.canvas.pending_redraw());
    assert_eq!(v.canvas.update_count(), updates_before + 1);
}

#[test]
fn test_swap_aktualisiert_nur_ueber_den_reorder_kanal() {
    let viewer = Viewer::new("viewer");
    let mut layers = LayerList::with_owner(&viewer);
    let a = shape("a");
    let b = shape("b");
    layers.append(a.clone());
    layers.append(b.clone());

    layers.swap(&a, &b).expect("beide enthalten");

    // Kein Item-Event: beide Layer bleiben attacht
    assert!(a.viewer().is_some());
    assert!(b.viewer().is_some());
    // Aber Registry-Clear wie bei jedem Reorder
    assert!(viewer.borrow().canvas.draw_order.is_empty());
}

#[test]
fn test_reattach_verschiebt_den_change_hook() {
    let erster = Viewer::new("erster");
    let zweiter = Viewer::new("zweiter");
    let mut layers = LayerList::with_owner(&erster);

    let a = shape("a");
    layers.append(a.clone());
    assert_eq!(erster.borrow().canvas.update_count(), 1);

    layers.set_owner(Some(&zweiter));

    // Bulk-Reassignment ohne Item-Events: die Registry des neuen Viewers
    // bleibt leer, aber jeder Layer haengt am neuen Viewer
    assert!(zweiter.borrow().canvas.draw_order.is_empty());
    let attached = a.viewer().expect("a muss attacht sein");
    assert!(std::rc::Rc::ptr_eq(&attached, &zweiter));

    layers.append(shape("b"));
    assert_eq!(erster.borrow().canvas.update_count(), 1, "alter Hook ist ab");
    assert_eq!(zweiter.borrow().canvas.update_count(), 1);
}

#[test]
fn test_detach_beendet_canvas_synchronisation() {
    let viewer = Viewer::new("viewer");
    let mut layers = LayerList::with_owner(&viewer);
    let a = shape("a");
    layers.append(a.clone());

    layers.set_owner(None);
    assert!(a.viewer().is_none());

    let updates_before = viewer.borrow().canvas.update_count();
    layers.append(shape("b"));
    layers.reorder([1usize, 0]).expect("Permutation gueltig");
    assert_eq!(viewer.borrow().canvas.update_count(), updates_before);
}

#[test]
fn test_zerstoerter_viewer_blockiert_keine_mutationen() {
    let mut layers = LayerList::new();
    {
        let viewer = Viewer::new("kurzlebig");
        layers.set_owner(Some(&viewer));
        layers.append(shape("a"));
    }

    assert!(layers.owner().is_none());
    layers.append(shape("b"));
    layers.swap(0, 1).expect("Swap trotz abgelaufenem Owner");
    layers.pop_last().expect("Pop trotz abgelaufenem Owner");
}

#[test]
fn test_liste_haelt_viewer_nicht_am_leben() {
    let mut layers = LayerList::new();
    let viewer = Viewer::new("viewer");
    layers.set_owner(Some(&viewer));

    assert_eq!(std::rc::Rc::strong_count(&viewer), 1, "nur der Host haelt stark");
}
