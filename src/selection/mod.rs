pub mod prompt;

pub use prompt::{DialoguerPrompt, Prompt};

use crate::core::{
    constants::BALANCE_DISPLAY_PRECISION, InputError, SwapError, SwapResult, TokenBalances,
    TokenInfo,
};
use crate::utils::{format_units, parse_units};
use ethers::types::U256;
use log::{error, info, warn};

/// What the selector demands from the chosen token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOptions {
    /// Ask for an amount and store it on the token.
    pub input_amount: bool,
    /// Refuse a token with zero balance.
    pub check_balance: bool,
}

impl ChoiceOptions {
    pub const SOURCE: Self = Self {
        input_amount: true,
        check_balance: true,
    };
    pub const DESTINATION: Self = Self {
        input_amount: false,
        check_balance: false,
    };
    pub const GAS: Self = Self {
        input_amount: false,
        check_balance: true,
    };
}

/// Parse a 1-based menu choice into a 0-based index.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, InputError> {
    let trimmed = input.trim();
    let choice: usize = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if choice == 0 || choice > count {
        return Err(InputError::OutOfRange(choice, count));
    }

    Ok(choice - 1)
}

/// Check a requested amount against the balance seen at selection time.
pub fn validate_amount(amount: U256, balance: U256) -> Result<U256, InputError> {
    if amount.is_zero() {
        return Err(InputError::ZeroAmount);
    }
    if amount > balance {
        return Err(InputError::ExceedsBalance {
            requested: amount,
            available: balance,
        });
    }
    Ok(amount)
}

/// Menu line for a token: `"{index}. {symbol} {balance}"`.
pub fn token_line(index: usize, token: &TokenInfo) -> String {
    format!(
        "{}. {} {}",
        index,
        token.symbol,
        format_units(token.balance, token.decimals, BALANCE_DISPLAY_PRECISION)
    )
}

/// Interactive token picker over any [`Prompt`].
pub struct TokenSelector<P: Prompt> {
    prompt: P,
}

impl<P: Prompt> TokenSelector<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    /// List the tokens, read a valid choice and, if requested, an amount.
    pub fn choose_token(
        &mut self,
        tokens: &mut TokenBalances,
        options: ChoiceOptions,
    ) -> SwapResult<TokenInfo> {
        for (i, token) in tokens.iter().enumerate() {
            self.prompt.show(&token_line(i + 1, token));
        }

        let index = loop {
            let input = self.prompt.read_line("Select token")?;
            match parse_selection(&input, tokens.len()) {
                Ok(index) => break index,
                Err(e) => warn!("Invalid choice ({}), try again", e),
            }
        };

        let token = &mut tokens[index];
        self.prompt.show(&format!("Selected: {}", token.symbol));

        if options.check_balance && token.balance.is_zero() {
            error!("Zero balance for {}, exiting", token.symbol);
            return Err(SwapError::ZeroBalance(token.symbol.clone()));
        }

        if options.input_amount {
            let amount = loop {
                let input = self
                    .prompt
                    .read_line(&format!("Amount of {}", token.symbol))?;
                match parse_units(&input, token.decimals)
                    .and_then(|amount| validate_amount(amount, token.balance))
                {
                    Ok(amount) => break amount,
                    Err(e) => warn!("Invalid amount ({}), try again", e),
                }
            };
            info!(
                "Chosen amount: {} {}",
                format_units(amount, token.decimals, BALANCE_DISPLAY_PRECISION),
                token.symbol
            );
            token.chosen_amount = Some(amount);
        }

        Ok(token.clone())
    }
}
