use cream_diagnostics::DiagnosticCollection;
use cream_scanner::Scanner;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// A medium-size script with every lexical category
const SCRIPT_SOURCE: &str = r#"
// Bank account example
class Account {
    init(owner, balance) {
        this.owner = owner;
        this.balance = balance;
    }

    deposit(amount) {
        if (amount <= 0) {
            print "Deposit must be positive.";
            return false;
        }
        this.balance = this.balance + amount;
        return true;
    }

    withdraw(amount) {
        if (amount > this.balance) {
            print "Insufficient funds
for this withdrawal.";
            return false;
        }
        this.balance = this.balance - amount;
        return true;
    }
}

class Savings < Account {
    init(owner, balance, rate) {
        super.init(owner, balance);
        this.rate = rate;
    }

    accrue(months) {
        for (var i = 0; i < months; i = i + 1) {
            this.balance = this.balance * (1 + this.rate / 12);
        }
        return this.balance;
    }
}

fun report(account) {
    var flag = nil;
    if (account.balance >= 1000.50 and !(account.balance == 0)) {
        flag = true;
    } else {
        flag = false;
    }
    while (flag != nil or false) {
        print account.owner;
        flag = nil;
    }
}

var savings = Savings("ada", 1250.75, 0.035);
savings.deposit(100);
savings.accrue(6);
report(savings);
"#;

fn bench_scan_script(c: &mut Criterion) {
    c.bench_function("scan_script_medium", |b| {
        b.iter(|| {
            let mut diagnostics = DiagnosticCollection::new();
            let count = Scanner::new(black_box(SCRIPT_SOURCE), &mut diagnostics).count();
            black_box(count);
        });
    });
}

criterion_group!(benches, bench_scan_script);
criterion_main!(benches);
