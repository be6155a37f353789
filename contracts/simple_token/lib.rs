#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod amount;

#[ink::contract]
mod simple_token {
    use crate::amount;
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    pub type Result<T> = core::result::Result<T, Error>;

    #[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        EmptyName,
        EmptySymbol,
        InsufficientBalance,
        InsufficientAllowance,
        Overflow,
    }

    /// Value moved between accounts. `from_acc` is `None` when supply is issued.
    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from_acc: Option<AccountId>,
        #[ink(topic)]
        to_acc: AccountId,
        value: Balance,
    }

    /// Allowance of `spender_acc` over `owner_acc` was set to `value`.
    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner_acc: AccountId,
        #[ink(topic)]
        spender_acc: AccountId,
        value: Balance,
    }

    #[ink(storage)]
    pub struct SimpleToken {
        // metadata, fixed at construction
        name: String,
        symbol: String,
        decimals: u8,
        issuer_acc: AccountId,

        // ledger state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
    }

    impl SimpleToken {
        /// Creates the ledger and credits `initial_amount * 10^decimals` to the
        /// caller, who becomes the issuer.
        #[ink(constructor)]
        pub fn new(
            name: String,
            symbol: String,
            initial_amount: Balance,
            decimals: u8,
        ) -> Result<Self> {
            ensure(!name.is_empty(), Error::EmptyName)?;
            ensure(!symbol.is_empty(), Error::EmptySymbol)?;
            let supply = no_overflow(amount::scale(initial_amount, decimals))?;

            let issuer_acc = Self::env().caller();
            let mut balances = Mapping::default();
            if supply != 0 {
                balances.insert(&issuer_acc, &supply);
            }

            ink::env::debug_println!(
                "simple_token: created {} ({}) decimals={} supply={}",
                name,
                symbol,
                decimals,
                supply
            );
            Self::env().emit_event(Transfer {
                from_acc: None,
                to_acc: issuer_acc,
                value: supply,
            });

            Ok(Self {
                name,
                symbol,
                decimals,
                issuer_acc,
                total_supply: supply,
                balances,
                allowances: Mapping::default(),
            })
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            self.symbol.clone()
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            self.decimals
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        /// The only account allowed to call [`increase`](Self::increase).
        #[ink(message)]
        pub fn issuer(&self) -> AccountId {
            self.issuer_acc
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.balances.get(&owner_acc).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0)
        }

        // -------- write API --------

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, value: Balance) -> Result<bool> {
            let from_acc = self.env().caller();
            let (new_from, new_to) = self.plan_move(from_acc, to_acc, value)?;
            self.apply_move(from_acc, to_acc, new_from, new_to, value);
            Ok(true)
        }

        /// Moves `value` out of `from_acc` on behalf of the caller, consuming
        /// the allowance `from_acc` granted to the caller.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            value: Balance,
        ) -> Result<bool> {
            let spender_acc = self.env().caller();
            let current_allow = self.allowance(from_acc, spender_acc);
            ensure(current_allow >= value, Error::InsufficientAllowance)?;
            let (new_from, new_to) = self.plan_move(from_acc, to_acc, value)?;

            self.set_allowance(from_acc, spender_acc, current_allow - value);
            self.apply_move(from_acc, to_acc, new_from, new_to, value);
            Ok(true)
        }

        /// Overwrites the caller's allowance for `spender_acc`.
        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, value: Balance) -> Result<bool> {
            let owner_acc = self.env().caller();
            self.set_allowance(owner_acc, spender_acc, value);
            self.env().emit_event(Approval { owner_acc, spender_acc, value });
            Ok(true)
        }

        #[ink(message)]
        pub fn increase_approval(
            &mut self,
            spender_acc: AccountId,
            added_value: Balance,
        ) -> Result<bool> {
            let owner_acc = self.env().caller();
            let current_val = self.allowance(owner_acc, spender_acc);
            let new_val = no_overflow(current_val.checked_add(added_value))?;
            self.set_allowance(owner_acc, spender_acc, new_val);
            self.env().emit_event(Approval { owner_acc, spender_acc, value: new_val });
            Ok(true)
        }

        /// Lowers the caller's allowance for `spender_acc`. Subtracting more
        /// than is granted leaves the allowance at zero instead of failing.
        #[ink(message)]
        pub fn decrease_approval(
            &mut self,
            spender_acc: AccountId,
            subtracted_value: Balance,
        ) -> Result<bool> {
            let owner_acc = self.env().caller();
            let current_val = self.allowance(owner_acc, spender_acc);
            let new_val = current_val.saturating_sub(subtracted_value);
            self.set_allowance(owner_acc, spender_acc, new_val);
            self.env().emit_event(Approval { owner_acc, spender_acc, value: new_val });
            Ok(true)
        }

        /// Issues `amount_val * 10^decimals` new units to the issuer.
        ///
        /// A caller other than the issuer gets `Ok(false)` and nothing changes;
        /// the call itself is not reverted.
        #[ink(message)]
        pub fn increase(&mut self, amount_val: Balance) -> Result<bool> {
            let caller_acc = self.env().caller();
            if caller_acc != self.issuer_acc {
                ink::env::debug_println!(
                    "simple_token: increase refused for non-issuer {:?}",
                    caller_acc
                );
                return Ok(false)
            }

            let value = no_overflow(amount::scale(amount_val, self.decimals))?;
            let new_total = no_overflow(self.total_supply.checked_add(value))?;
            let new_bal = no_overflow(self.balance_of(caller_acc).checked_add(value))?;

            self.total_supply = new_total;
            self.set_balance(caller_acc, new_bal);
            self.env().emit_event(Transfer {
                from_acc: None,
                to_acc: caller_acc,
                value,
            });
            Ok(true)
        }

        // ---- internals ----

        /// Computes both balances after moving `value`, without writing.
        fn plan_move(
            &self,
            from_acc: AccountId,
            to_acc: AccountId,
            value: Balance,
        ) -> Result<(Balance, Balance)> {
            let from_bal = self.balance_of(from_acc);
            ensure(from_bal >= value, Error::InsufficientBalance)?;
            let new_from = from_bal - value;

            // a self-transfer credits the already debited balance
            let to_bal = if from_acc == to_acc {
                new_from
            } else {
                self.balance_of(to_acc)
            };
            let new_to = no_overflow(to_bal.checked_add(value))?;
            Ok((new_from, new_to))
        }

        fn apply_move(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            new_from: Balance,
            new_to: Balance,
            value: Balance,
        ) {
            self.set_balance(from_acc, new_from);
            self.set_balance(to_acc, new_to);
            self.env().emit_event(Transfer {
                from_acc: Some(from_acc),
                to_acc,
                value,
            });
        }

        fn set_balance(&mut self, owner_acc: AccountId, value: Balance) {
            if value == 0 {
                self.balances.remove(&owner_acc);
            } else {
                self.balances.insert(&owner_acc, &value);
            }
        }

        fn set_allowance(&mut self, owner_acc: AccountId, spender_acc: AccountId, value: Balance) {
            if value == 0 {
                self.allowances.remove(&(owner_acc, spender_acc));
            } else {
                self.allowances.insert(&(owner_acc, spender_acc), &value);
            }
        }
    }

    /// Aborts the current call with `err` unless `condition` holds.
    fn ensure(condition: bool, err: Error) -> Result<()> {
        if !condition {
            ink::env::debug_println!("simple_token: rejected with {:?}", err);
            return Err(err)
        }
        Ok(())
    }

    fn no_overflow(value: Option<Balance>) -> Result<Balance> {
        match value {
            Some(v) => Ok(v),
            None => {
                ink::env::debug_println!("simple_token: rejected with {:?}", Error::Overflow);
                Err(Error::Overflow)
            }
        }
    }


}
