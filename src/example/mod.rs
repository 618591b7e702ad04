//! Realistic sample request used by the example command and the docs.

use once_cell::sync::Lazy;

use crate::domain::{Frequency, MonthDate, PaymentItem, PredictionRequest};

struct ItemSpec {
    name: &'static str,
    amount: f64,
    frequency: Frequency,
    start_offset: u32,
}

impl ItemSpec {
    const fn recurring(name: &'static str, amount: f64) -> Self {
        Self {
            name,
            amount,
            frequency: Frequency::Monthly,
            start_offset: 0,
        }
    }

    const fn one_time(name: &'static str, amount: f64, start_offset: u32) -> Self {
        Self {
            name,
            amount,
            frequency: Frequency::OneTime,
            start_offset,
        }
    }

    const fn monthly_from(name: &'static str, amount: f64, start_offset: u32) -> Self {
        Self {
            name,
            amount,
            frequency: Frequency::Monthly,
            start_offset,
        }
    }
}

static INCOMES: Lazy<Vec<ItemSpec>> = Lazy::new(|| {
    vec![
        ItemSpec::recurring("Primary Salary", 4_200.0),
        ItemSpec::recurring("Side Consulting", 800.0),
        ItemSpec::recurring("Investment Dividends", 150.0),
        ItemSpec::recurring("Rental Property", 1_200.0),
        ItemSpec::one_time("Freelance Project", 2_500.0, 1),
        ItemSpec::one_time("Tax Refund", 1_800.0, 3),
        ItemSpec::one_time("Bonus", 3_000.0, 6),
        ItemSpec::monthly_from("Part-time Teaching", 600.0, 2),
        ItemSpec::one_time("Stock Options Vest", 5_000.0, 12),
        ItemSpec::one_time("Holiday Bonus", 2_000.0, 11),
    ]
});

static EXPENSES: Lazy<Vec<ItemSpec>> = Lazy::new(|| {
    vec![
        // Fixed monthly expenses
        ItemSpec::recurring("Mortgage", 1_850.0),
        ItemSpec::recurring("Property Tax", 420.0),
        ItemSpec::recurring("Home Insurance", 180.0),
        ItemSpec::recurring("Car Payment", 450.0),
        ItemSpec::recurring("Car Insurance", 160.0),
        ItemSpec::recurring("Health Insurance", 380.0),
        ItemSpec::recurring("Dental Insurance", 45.0),
        ItemSpec::recurring("Life Insurance", 85.0),
        ItemSpec::recurring("Phone Bill", 95.0),
        ItemSpec::recurring("Internet", 75.0),
        ItemSpec::recurring("Streaming Services", 65.0),
        ItemSpec::recurring("Gym Membership", 50.0),
        ItemSpec::recurring("Student Loan", 320.0),
        ItemSpec::recurring("Credit Card Minimum", 180.0),
        // Variable monthly expenses
        ItemSpec::recurring("Groceries", 450.0),
        ItemSpec::recurring("Gasoline", 200.0),
        ItemSpec::recurring("Utilities", 150.0),
        ItemSpec::recurring("Dining Out", 300.0),
        ItemSpec::recurring("Entertainment", 200.0),
        ItemSpec::recurring("Personal Care", 100.0),
        ItemSpec::recurring("Household Items", 80.0),
        ItemSpec::recurring("Pet Expenses", 120.0),
        ItemSpec::recurring("Charity", 200.0),
        ItemSpec::recurring("Savings", 500.0),
        ItemSpec::recurring("Emergency Fund", 300.0),
        ItemSpec::recurring("401k Contribution", 600.0),
        ItemSpec::recurring("IRA Contribution", 500.0),
        // One-time and irregular expenses
        ItemSpec::one_time("Winter Clothes", 400.0, 1),
        ItemSpec::one_time("Car Maintenance", 350.0, 2),
        ItemSpec::one_time("Vacation Fund", 2_500.0, 3),
        ItemSpec::one_time("Home Repairs", 1_200.0, 4),
        ItemSpec::one_time("Medical Checkup", 300.0, 5),
        ItemSpec::one_time("Summer Clothes", 300.0, 6),
        ItemSpec::one_time("Back to School", 600.0, 7),
        ItemSpec::one_time("Holiday Gifts", 800.0, 8),
        ItemSpec::one_time("Car Registration", 150.0, 9),
        ItemSpec::one_time("Professional Development", 500.0, 10),
        ItemSpec::one_time("Home Appliance Replacement", 1_500.0, 11),
        ItemSpec::one_time("Annual Insurance Premium", 600.0, 12),
        ItemSpec::one_time("Vacation Trip", 4_000.0, 13),
        ItemSpec::one_time("Furniture Upgrade", 2_200.0, 14),
        ItemSpec::one_time("Wedding Gift", 250.0, 15),
        ItemSpec::one_time("Computer Upgrade", 1_800.0, 16),
        ItemSpec::one_time("Dental Work", 800.0, 17),
        ItemSpec::one_time("Home Security System", 600.0, 18),
        ItemSpec::one_time("Kitchen Renovation", 8_000.0, 20),
        ItemSpec::one_time("New Car Down Payment", 5_000.0, 24),
    ]
});

fn build(specs: &[ItemSpec], start: MonthDate) -> Vec<PaymentItem> {
    specs
        .iter()
        .map(|spec| {
            PaymentItem::new(spec.name, spec.amount, start.add_months(spec.start_offset))
                .with_frequency(spec.frequency)
        })
        .collect()
}

/// Builds the sample request anchored at a caller-supplied start month so
/// the generator stays deterministic.
pub fn example_request(start: MonthDate, months: u32, initial_budget: f64) -> PredictionRequest {
    PredictionRequest {
        prediction_months: months,
        initial_budget,
        start_prediction_month: start,
        incomes: build(&INCOMES, start),
        expenses: build(&EXPENSES, start),
        output_currency: Default::default(),
    }
}
