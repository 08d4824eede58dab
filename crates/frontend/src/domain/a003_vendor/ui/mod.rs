pub mod final_settlement;
