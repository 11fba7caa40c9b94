use chrono::{Duration, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use models::reservation::{self, StayRange};
use models::room;
use service::availability::filter_available;
use uuid::Uuid;

fn fixture(rooms: usize, stays_per_room: i64) -> (Vec<room::Model>, Vec<reservation::Model>) {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let hotel_id = Uuid::new_v4();
    let rooms: Vec<room::Model> = (0..rooms)
        .map(|n| room::Model {
            id: Uuid::new_v4(),
            hotel_id,
            room_number: n as i32 + 1,
            room_type: "ac".into(),
            capacity: 2,
            price: 5000.0,
            available: n % 7 != 0,
            created_at: Utc::now().into(),
        })
        .collect();
    let reservations = rooms
        .iter()
        .flat_map(|r| {
            (0..stays_per_room).map(move |i| reservation::Model {
                id: Uuid::new_v4(),
                room_id: Some(r.id),
                hotel_id: Some(hotel_id),
                customer_id: None,
                check_in: base + Duration::days(i * 3),
                check_out: base + Duration::days(i * 3 + 2),
                status: if i % 2 == 0 { "open".into() } else { "closed".into() },
                created_at: Utc::now().into(),
            })
        })
        .collect();
    (rooms, reservations)
}

fn bench_filter(c: &mut Criterion) {
    let (rooms, reservations) = fixture(200, 30);
    let stay = StayRange::new(
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
    )
    .unwrap();

    c.bench_function("filter_available_200_rooms", |b| {
        b.iter(|| filter_available(black_box(rooms.clone()), black_box(&reservations), Some(&stay)))
    });
    c.bench_function("filter_available_no_range", |b| {
        b.iter(|| filter_available(black_box(rooms.clone()), black_box(&reservations), None))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
