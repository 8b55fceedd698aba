use libra_data::{
    formatting::{format_currency, format_date_time_to_local},
    CardData, DailyCost, Member, MembersTableRow, Transaction, TransactionsTableRow, User,
};

pub trait PrintFormatted {
    fn print_formatted(&self);
}

impl PrintFormatted for Member {
    fn print_formatted(&self) {
        println!("ID:\t\t\t{}", self.id);
        println!("Name:\t\t\t{}", self.name);
        println!("Email:\t\t\t{}", self.email);
        println!("Image:\t\t\t{}", self.image_url);
    }
}

impl PrintFormatted for User {
    fn print_formatted(&self) {
        println!("ID:\t\t\t{}", self.id);
        println!("Name:\t\t\t{}", self.name);
        println!("Email:\t\t\t{}", self.email);
    }
}

impl PrintFormatted for Transaction {
    fn print_formatted(&self) {
        println!("ID:\t\t\t{}", self.id);
        println!("Member:\t\t\t{}", self.member_id);
        println!("Amount:\t\t\t{}", format_currency(self.amount));
        println!("Status:\t\t\t{}", self.status);
        println!("Date:\t\t\t{}", format_date_time_to_local(&self.date));
        println!("Title:\t\t\t{}", self.title);
        println!("Accountant Book:\t{}", self.accountant_book);
        println!("Class:\t\t\t{} / {}", self.class, self.sub_class);
        println!("Description:\t\t{}", self.description);
    }
}

impl PrintFormatted for Vec<MembersTableRow> {
    fn print_formatted(&self) {
        println!(
            "{:<36}\t{:<24}\t{:<30}\t{:>6}\t{:>14}\t{:>14}",
            "ID", "Name", "Email", "Count", "Cost", "Income"
        );
        println!("{:-<150}", "-");
        for member in self {
            println!(
                "{:<36}\t{:<24}\t{:<30}\t{:>6}\t{:>14}\t{:>14}",
                member.id,
                member.name,
                member.email,
                member.total_transactions,
                member.total_cost,
                member.total_income,
            );
        }
    }
}

impl PrintFormatted for Vec<TransactionsTableRow> {
    fn print_formatted(&self) {
        println!(
            "{:<36}\t{:<24}\t{:>14}\t{:<24}\t{:<6}\t{:<16}\t{}",
            "ID", "Date", "Amount", "Member", "Status", "Book", "Title"
        );
        println!("{:-<180}", "-");
        for tx in self {
            println!(
                "{:<36}\t{:<24}\t{:>14}\t{:<24}\t{:<6}\t{:<16}\t{}",
                tx.id,
                format_date_time_to_local(&tx.date),
                format_currency(tx.amount),
                tx.name,
                tx.status,
                tx.accountant_book,
                tx.title,
            );
        }
    }
}

impl PrintFormatted for CardData {
    fn print_formatted(&self) {
        println!("Members:\t\t{}", self.number_of_members);
        println!("Transactions:\t\t{}", self.number_of_transactions);
        println!("Income:\t\t\t{}", self.total_income);
        println!("Cost:\t\t\t{}", self.total_cost);
    }
}

impl PrintFormatted for Vec<DailyCost> {
    fn print_formatted(&self) {
        for day in self {
            println!("{}\t{:>14}", day.date, format_currency(day.total_cost));
        }
    }
}
