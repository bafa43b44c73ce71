/// time control - deterministic accrual with a pinned clock
use chrono::{Duration, TimeZone, Utc};
use fixed_deposit_rs::{
    BookDepositRequest, DepositService, DepositStore, InMemoryDepositStore,
    InMemoryUserDirectory, Money, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== time control example ===\n");

    // create controlled time for testing
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    let mut users = InMemoryUserDirectory::new();
    let user = users.add_user("asha");
    let store = InMemoryDepositStore::new();
    let service = DepositService::new(&users, &store);

    println!("booking date: {}", time.now().format("%Y-%m-%d"));

    let request =
        BookDepositRequest::new(user.id, Money::from_major(100_000), "Longterm Growth", 12);
    let deposit = service.book_deposit(&request, &time)?;
    println!(
        "booked 100000 at {} maturing {}",
        deposit.interest_rate, deposit.maturity_date
    );

    // advance half a year and read the accrued interest
    controller.advance(Duration::days(182));
    println!("\nadvanced to: {}", time.now().format("%Y-%m-%d"));

    let listed = service.deposits_for_user(user.id, &time)?;
    println!("accrued interest (182 days): {}", listed[0].accrued_interest);

    // break the deposit; accrual freezes at the broken date
    let mut broken = listed.into_iter().next().unwrap();
    broken.mark_broken(time.now().date_naive())?;
    store.save(broken)?;
    println!("\ndeposit broken on {}", time.now().format("%Y-%m-%d"));

    controller.advance(Duration::days(200));
    println!("advanced to: {}", time.now().format("%Y-%m-%d"));

    let listed = service.deposits_for_user(user.id, &time)?;
    println!(
        "accrued interest (frozen at broken date): {}",
        listed[0].accrued_interest
    );

    Ok(())
}
