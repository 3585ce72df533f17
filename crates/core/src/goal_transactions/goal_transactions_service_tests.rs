#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::errors::Error;
    use crate::goal_transactions::{
        GoalTransactionKind, GoalTransactionService, GoalTransactionServiceTrait,
        NewGoalTransaction,
    };
    use crate::settings::{SettingsService, SettingsServiceTrait, UserSettingsUpdate};
    use crate::test_mocks::{
        MockAccountRepository, MockGoalRepository, MockGoalTransactionRepository,
        MockSettingsRepository,
    };

    const USER: &str = "user-1";

    struct Harness {
        accounts: Arc<MockAccountRepository>,
        goals: Arc<MockGoalRepository>,
        goal_txs: Arc<MockGoalTransactionRepository>,
        settings_service: Arc<SettingsService>,
        service: GoalTransactionService,
    }

    fn harness() -> Harness {
        let accounts = Arc::new(MockAccountRepository::new());
        let goals = Arc::new(MockGoalRepository::new());
        let goal_txs = Arc::new(MockGoalTransactionRepository::new());
        let settings_repo = Arc::new(MockSettingsRepository::new());
        let settings_service =
            Arc::new(SettingsService::new(settings_repo, accounts.clone()));
        let service = GoalTransactionService::new(
            goal_txs.clone(),
            accounts.clone(),
            goals.clone(),
            settings_service.clone(),
        );
        Harness {
            accounts,
            goals,
            goal_txs,
            settings_service,
            service,
        }
    }

    fn deposit(goal_id: &str, account_id: &str, amount: Decimal) -> NewGoalTransaction {
        NewGoalTransaction {
            goal_id: Some(goal_id.to_string()),
            account_id: account_id.to_string(),
            amount,
            kind: GoalTransactionKind::Deposit,
            description: None,
        }
    }

    fn withdrawal(goal_id: &str, account_id: &str, amount: Decimal) -> NewGoalTransaction {
        NewGoalTransaction {
            goal_id: Some(goal_id.to_string()),
            account_id: account_id.to_string(),
            amount,
            kind: GoalTransactionKind::Withdrawal,
            description: None,
        }
    }

    async fn designate(h: &Harness, account_id: &str) {
        h.settings_service
            .update_settings(
                USER,
                UserSettingsUpdate {
                    savings_account_id: Some(account_id.to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn deposit_moves_money_from_account_into_goal() {
        let h = harness();
        h.accounts.seed(USER, "savings", "Savings", dec!(500));
        h.goals.seed(USER, "goal", dec!(1000), dec!(0));
        designate(&h, "savings").await;

        let created = h
            .service
            .create_goal_transaction(USER, deposit("goal", "savings", dec!(200)))
            .await
            .unwrap();

        assert_eq!(created.kind, GoalTransactionKind::Deposit);
        assert_eq!(h.goals.current_amount_of("goal"), dec!(200));
        assert_eq!(h.accounts.balance_of("savings"), dec!(300));
        assert_eq!(h.goal_txs.rows().len(), 1);
    }

    #[tokio::test]
    async fn withdrawal_returns_money_to_the_account() {
        let h = harness();
        h.accounts.seed(USER, "savings", "Savings", dec!(100));
        h.goals.seed(USER, "goal", dec!(1000), dec!(250));

        h.service
            .create_goal_transaction(USER, withdrawal("goal", "savings", dec!(50)))
            .await
            .unwrap();

        assert_eq!(h.goals.current_amount_of("goal"), dec!(200));
        assert_eq!(h.accounts.balance_of("savings"), dec!(150));
    }

    #[tokio::test]
    async fn deposit_from_non_designated_account_is_rejected() {
        let h = harness();
        h.accounts.seed(USER, "savings", "Savings", dec!(500));
        h.accounts.seed(USER, "other", "Checking", dec!(500));
        h.goals.seed(USER, "goal", dec!(1000), dec!(0));
        designate(&h, "savings").await;

        let err = h
            .service
            .create_goal_transaction(USER, deposit("goal", "other", dec!(100)))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::PolicyViolation(_)));
        assert_eq!(h.goals.current_amount_of("goal"), dec!(0));
        assert_eq!(h.accounts.balance_of("other"), dec!(500));
        assert!(h.goal_txs.rows().is_empty());
    }

    #[tokio::test]
    async fn any_account_is_allowed_when_none_is_designated() {
        let h = harness();
        h.accounts.seed(USER, "checking", "Checking", dec!(500));
        h.goals.seed(USER, "goal", dec!(1000), dec!(0));

        h.service
            .create_goal_transaction(USER, deposit("goal", "checking", dec!(100)))
            .await
            .unwrap();

        assert_eq!(h.goals.current_amount_of("goal"), dec!(100));
    }

    #[tokio::test]
    async fn deposit_exceeding_balance_is_rejected_without_mutation() {
        let h = harness();
        h.accounts.seed(USER, "savings", "Savings", dec!(100));
        h.goals.seed(USER, "goal", dec!(1000), dec!(0));

        let err = h
            .service
            .create_goal_transaction(USER, deposit("goal", "savings", dec!(150)))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InsufficientFunds { .. }));
        assert_eq!(h.goals.current_amount_of("goal"), dec!(0));
        assert_eq!(h.accounts.balance_of("savings"), dec!(100));
        assert!(h.goal_txs.rows().is_empty());
    }

    #[tokio::test]
    async fn missing_goal_is_rejected() {
        let h = harness();
        h.accounts.seed(USER, "savings", "Savings", dec!(100));

        let err = h
            .service
            .create_goal_transaction(USER, deposit("nope", "savings", dec!(50)))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(h.accounts.balance_of("savings"), dec!(100));
    }

    /// No clamp: the goal may overshoot its target and go negative.
    #[tokio::test]
    async fn goal_amount_is_not_clamped() {
        let h = harness();
        h.accounts.seed(USER, "savings", "Savings", dec!(5000));
        h.goals.seed(USER, "goal", dec!(1000), dec!(0));

        h.service
            .create_goal_transaction(USER, deposit("goal", "savings", dec!(1500)))
            .await
            .unwrap();
        assert_eq!(h.goals.current_amount_of("goal"), dec!(1500));

        h.service
            .create_goal_transaction(USER, withdrawal("goal", "savings", dec!(2000)))
            .await
            .unwrap();
        assert_eq!(h.goals.current_amount_of("goal"), dec!(-500));
    }

    #[tokio::test]
    async fn transfer_kind_is_rejected_as_input() {
        let h = harness();
        h.accounts.seed(USER, "savings", "Savings", dec!(100));
        h.goals.seed(USER, "goal", dec!(1000), dec!(0));

        let err = h
            .service
            .create_goal_transaction(
                USER,
                NewGoalTransaction {
                    goal_id: Some("goal".to_string()),
                    account_id: "savings".to_string(),
                    amount: dec!(10),
                    kind: GoalTransactionKind::Transfer,
                    description: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn delete_reverses_a_deposit() {
        let h = harness();
        h.accounts.seed(USER, "savings", "Savings", dec!(500));
        h.goals.seed(USER, "goal", dec!(1000), dec!(0));

        let created = h
            .service
            .create_goal_transaction(USER, deposit("goal", "savings", dec!(200)))
            .await
            .unwrap();
        h.service
            .delete_goal_transaction(USER, &created.id)
            .await
            .unwrap();

        assert_eq!(h.goals.current_amount_of("goal"), dec!(0));
        assert_eq!(h.accounts.balance_of("savings"), dec!(500));
        assert!(h.goal_txs.rows().is_empty());
    }

    #[tokio::test]
    async fn list_returns_only_the_goals_rows() {
        let h = harness();
        h.accounts.seed(USER, "savings", "Savings", dec!(500));
        h.goals.seed(USER, "goal-a", dec!(1000), dec!(0));
        h.goals.seed(USER, "goal-b", dec!(1000), dec!(0));

        h.service
            .create_goal_transaction(USER, deposit("goal-a", "savings", dec!(10)))
            .await
            .unwrap();
        h.service
            .create_goal_transaction(USER, deposit("goal-b", "savings", dec!(20)))
            .await
            .unwrap();

        let rows = h
            .service
            .list_goal_transactions(USER, "goal-a")
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, dec!(10));
    }
}
