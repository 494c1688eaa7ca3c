use super::*;

#[test]
fn events_come_out_in_arrival_order() {
    let mut d = Dispatcher::new();
    d.push(Event::PlayPause);
    d.extend([Event::Seek(5), Event::StopVideo]);
    assert_eq!(d.len(), 3);
    assert_eq!(d.pop(), Some(Event::PlayPause));
    assert_eq!(d.pop(), Some(Event::Seek(5)));
    assert_eq!(d.pop(), Some(Event::StopVideo));
    assert_eq!(d.pop(), None);
    assert!(d.is_empty());
}

