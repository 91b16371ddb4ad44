use kassa_data::{Account, Expense};
use kassa_reports::dashboard::DashboardStats;
use kassa_reports::summary::GroupTotal;

pub trait PrintFormatted {
    fn print_formatted(&self);
}

impl PrintFormatted for Expense {
    fn print_formatted(&self) {
        println!("Amount:\t\t{:.2}", self.amount);
        println!("Category:\t{}", self.category);
        println!("Date:\t\t{}", self.date);
        println!("Note:\t\t{}", self.note);
    }
}

impl PrintFormatted for Vec<Expense> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<12}\t{:<15}\t{:>12}\t{}",
            "ID", "Date", "Category", "Amount", "Note"
        );
        println!("{:-<80}", "-");

        for expense in self {
            println!(
                "{:>4}\t{:<12}\t{:<15}\t{:>12.2}\t{}",
                expense.id,
                expense.date.to_string(),
                expense.category.to_string(),
                expense.amount,
                expense.note,
            );
        }
    }
}

impl PrintFormatted for Vec<Account> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<24}\t{}",
            "ID", "Username", "Created"
        );
        println!("{:-<60}", "-");
        for account in self {
            println!(
                "{:>4}\t{:<24}\t{}",
                account.id, account.username, account.created_at
            );
        }
    }
}

impl PrintFormatted for Vec<GroupTotal> {
    fn print_formatted(&self) {
        println!("{:<40}\t{:>12}", "Group", "Total");
        println!("{:-<60}", "-");
        for group in self {
            println!("{:<40}\t{:>12.2}", group.group, group.total);
        }
    }
}

impl PrintFormatted for DashboardStats {
    fn print_formatted(&self) {
        println!("Total expenses:\t\t{:.2}", self.total_expenses);
        println!("This month:\t\t{:.2}", self.month_expenses);
        println!("This week:\t\t{:.2}", self.week_expenses);
        println!("Records:\t\t{}", self.total_records);
        println!("");
        println!("{:<20}\t{:>12}", "Category", "Total");
        println!("{:-<40}", "-");
        for category in &self.category_breakdown {
            println!("{:<20}\t{:>12.2}", category.category, category.total);
        }
    }
}
