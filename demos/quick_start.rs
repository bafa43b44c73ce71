/// quick start - book a fixed deposit and list it
use fixed_deposit_rs::{
    BookDepositRequest, DepositService, InMemoryDepositStore, InMemoryUserDirectory, Money,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut users = InMemoryUserDirectory::new();
    let user = users.add_user("asha");
    let store = InMemoryDepositStore::new();

    let service = DepositService::new(&users, &store);

    // book a 12-month deposit under the Premium Saver scheme
    let request = BookDepositRequest::new(user.id, Money::from_major(10_000), "Premium Saver", 12);
    let deposit = service.book_deposit_now(&request)?;
    println!("booked:\n{}", deposit.json());

    // list the user's deposits with accrued interest recomputed as of now
    for deposit in service.deposits_for_user_now(user.id)? {
        println!(
            "deposit {} ({}): accrued interest {}",
            deposit.id.map(|id| id.to_string()).unwrap_or_default(),
            deposit.scheme,
            deposit.accrued_interest
        );
    }

    Ok(())
}
