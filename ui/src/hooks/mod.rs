pub mod use_fetch_notifier;
